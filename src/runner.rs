//! Runs the tour end to end: connect, execute every step in order, disconnect.

use std::io::Write;

use mongodb::Client;

use crate::config::BookstoreConfig;
use crate::connection::{ConnectionManager, ExplainFindRequest};
use crate::error::{Error, Result};
use crate::explain::summarize_explain;
use crate::report::{Report, report_failure};
use crate::tour::{Operation, Step, tour};

/// Top-level handler: run the tour and report any failure to `err_out`.
///
/// Never propagates; the error, if any, is logged and returned for callers
/// that want to inspect it.
pub fn run_reported<W: Write, E: Write>(
    config: &BookstoreConfig,
    out: W,
    err_out: &mut E,
) -> Option<Error> {
    let result = ConnectionManager::new().and_then(|manager| run(&manager, config, out));

    let err = result.err()?;
    log::error!("Tour aborted: {err}");
    if let Err(write_err) = report_failure(&err, err_out) {
        log::error!("Failed to write error report: {write_err}");
    }
    Some(err)
}

/// Connect, run every step, and always disconnect once connected.
///
/// The first failing step aborts the rest of the sequence and its error is
/// returned after the client has been shut down.
pub fn run<W: Write>(
    manager: &ConnectionManager,
    config: &BookstoreConfig,
    out: W,
) -> Result<()> {
    let client = manager.connect(config)?;
    let mut report = Report::new(out);

    let result = run_tour(manager, &client, config, &mut report);
    let flushed = report.flush();
    manager.disconnect(client);

    result.and(flushed)
}

/// Execute every section against an already connected client.
pub fn run_tour<W: Write>(
    manager: &ConnectionManager,
    client: &Client,
    config: &BookstoreConfig,
    report: &mut Report<W>,
) -> Result<()> {
    for section in tour() {
        log::info!("{}", section.title);
        report.heading(section.title)?;

        for step in &section.steps {
            log::debug!("Running step: {}", step.title);
            report.heading(step.title)?;
            run_step(manager, client, config, step, report)?;
        }
    }
    Ok(())
}

fn run_step<W: Write>(
    manager: &ConnectionManager,
    client: &Client,
    config: &BookstoreConfig,
    step: &Step,
    report: &mut Report<W>,
) -> Result<()> {
    let database = config.database.as_str();
    let collection = config.collection.as_str();

    match step.operation.clone() {
        Operation::Find(opts) => {
            let documents = manager.find_documents(client, database, collection, opts)?;
            log::debug!("{} returned {} document(s)", step.title, documents.len());
            report.documents(&documents)
        }
        Operation::UpdateOne { filter, update } => {
            let result = manager.update_one(client, database, collection, filter, update)?;
            log::debug!(
                "{} matched {} and modified {}",
                step.title,
                result.matched_count,
                result.modified_count
            );
            report.updated(&result)
        }
        Operation::DeleteOne { filter } => {
            let deleted = manager.delete_one(client, database, collection, filter)?;
            log::debug!("{} deleted {deleted}", step.title);
            report.deleted(deleted)
        }
        Operation::Aggregate { pipeline } => {
            let documents = manager.aggregate(client, database, collection, pipeline)?;
            log::debug!("{} produced {} group(s)", step.title, documents.len());
            report.documents(&documents)
        }
        Operation::CreateIndex { keys } => {
            let name = manager.create_index(client, database, collection, keys)?;
            log::info!("Created index {name}");
            report.index_created(&name)
        }
        Operation::ExplainFind { filter } => {
            let request = ExplainFindRequest::new(database, collection, filter);
            let explain = manager.explain_find(client, request)?;
            report.document(&explain)?;
            let summary = summarize_explain(&explain);
            log::debug!("{summary}");
            report.line(&summary.to_string())
        }
    }
}
