//! Explain command operations for find.

use mongodb::Client;
use mongodb::bson::{Document, doc};

use crate::connection::ConnectionManager;
use crate::connection::types::ExplainVerbosity;
use crate::error::Result;

pub struct ExplainFindRequest {
    pub database: String,
    pub collection: String,
    pub filter: Document,
    pub verbosity: ExplainVerbosity,
}

impl ExplainFindRequest {
    pub fn new(database: &str, collection: &str, filter: Document) -> Self {
        Self {
            database: database.to_string(),
            collection: collection.to_string(),
            filter,
            verbosity: ExplainVerbosity::default(),
        }
    }
}

impl ConnectionManager {
    /// Run explain for a `find` command using selected verbosity.
    pub fn explain_find(&self, client: &Client, request: ExplainFindRequest) -> Result<Document> {
        let client = client.clone();
        let ExplainFindRequest { database, collection, filter, verbosity } = request;

        self.runtime.block_on(async move {
            let db = client.database(&database);
            let mut find_cmd = doc! { "find": collection };
            if !filter.is_empty() {
                find_cmd.insert("filter", filter);
            }

            let command = doc! {
                "explain": find_cmd,
                "verbosity": verbosity.as_str(),
            };
            let explain = db.run_command(command).await?;
            Ok(explain)
        })
    }
}
