//! Condenses an `explain` document into the winning plan's stage chain.

use std::fmt;

use mongodb::bson::{Bson, Document};

/// What the planner chose for a query
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplainSummary {
    /// Stage labels in tree order, root first
    pub stages: Vec<String>,
    pub index_names: Vec<String>,
    pub has_collscan: bool,
}

impl ExplainSummary {
    pub fn uses_index(&self, name: &str) -> bool {
        self.index_names.iter().any(|index| index == name)
    }
}

impl fmt::Display for ExplainSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stages.is_empty() {
            return write!(f, "winning plan: unknown");
        }
        write!(f, "winning plan: {}", self.stages.join(" -> "))?;
        if !self.index_names.is_empty() {
            write!(f, " (index: {})", self.index_names.join(", "))?;
        }
        if self.has_collscan {
            write!(f, " [collection scan]")?;
        }
        Ok(())
    }
}

pub fn summarize_explain(explain_doc: &Document) -> ExplainSummary {
    let mut summary = ExplainSummary::default();

    if let Some(winning_plan) = explain_doc
        .get_document("queryPlanner")
        .ok()
        .and_then(|planner| planner.get_document("winningPlan").ok())
    {
        append_stage_tree(winning_plan, &mut summary);
    } else if let Some(exec_stage) = explain_doc
        .get_document("executionStats")
        .ok()
        .and_then(|stats| stats.get_document("executionStages").ok())
    {
        append_stage_tree(exec_stage, &mut summary);
    }

    summary.has_collscan =
        summary.stages.iter().any(|stage| stage.to_ascii_uppercase().contains("COLLSCAN"));
    summary
}

fn append_stage_tree(doc: &Document, summary: &mut ExplainSummary) {
    // Slot-based engine nests the classic tree under `queryPlan`.
    if doc.get("stage").is_none()
        && let Ok(query_plan) = doc.get_document("queryPlan")
    {
        append_stage_tree(query_plan, summary);
        return;
    }

    summary.stages.push(stage_label(doc));
    if let Ok(index_name) = doc.get_str("indexName")
        && !summary.uses_index(index_name)
    {
        summary.index_names.push(index_name.to_string());
    }

    if let Ok(child) = doc.get_document("inputStage") {
        append_stage_tree(child, summary);
    }
    if let Ok(children) = doc.get_array("inputStages") {
        for child in children.iter().filter_map(Bson::as_document) {
            append_stage_tree(child, summary);
        }
    }
}

fn stage_label(doc: &Document) -> String {
    if let Ok(stage) = doc.get_str("stage") {
        return stage.to_string();
    }
    if let Ok(stage) = doc.get_str("planNodeType") {
        return stage.to_string();
    }
    "Stage".to_string()
}
