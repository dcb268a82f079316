//! Console output for the tour: headings, document dumps and confirmations.

use std::io::Write;

use mongodb::bson::{Bson, Document};
use mongodb::results::UpdateResult;

use crate::error::{Error, Result};

pub const FAILURE_PREFIX: &str = "❌ Error running queries:";

/// Render documents as a pretty JSON array in relaxed Extended JSON.
pub fn documents_to_pretty_json(documents: &[Document]) -> Result<String> {
    let values: Vec<serde_json::Value> =
        documents.iter().map(|doc| Bson::Document(doc.clone()).into_relaxed_extjson()).collect();
    Ok(serde_json::to_string_pretty(&values)?)
}

pub fn document_to_pretty_json(document: &Document) -> Result<String> {
    let value = Bson::Document(document.clone()).into_relaxed_extjson();
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Writes the human-readable report to any sink
pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Blank line, then the title on its own line
    pub fn heading(&mut self, title: &str) -> Result<()> {
        writeln!(self.out, "\n{title}")?;
        Ok(())
    }

    pub fn documents(&mut self, documents: &[Document]) -> Result<()> {
        let json = documents_to_pretty_json(documents)?;
        writeln!(self.out, "{json}")?;
        Ok(())
    }

    pub fn document(&mut self, document: &Document) -> Result<()> {
        let json = document_to_pretty_json(document)?;
        writeln!(self.out, "{json}")?;
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub fn updated(&mut self, result: &UpdateResult) -> Result<()> {
        self.line(&format!(
            "matched {}, modified {}",
            result.matched_count, result.modified_count
        ))
    }

    pub fn deleted(&mut self, count: u64) -> Result<()> {
        self.line(&format!("deleted {count}"))
    }

    pub fn index_created(&mut self, name: &str) -> Result<()> {
        self.line(&format!("created index {name}"))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Write the single failure line with its fixed prefix.
pub fn report_failure(err: &Error, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{FAILURE_PREFIX} {err}")
}
