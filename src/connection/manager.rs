//! Core ConnectionManager struct and connection lifecycle.

use mongodb::Client;
use mongodb::bson::doc;
use tokio::runtime::Runtime;

use crate::config::BookstoreConfig;
use crate::error::{Error, Result};

/// Runs MongoDB operations one at a time on an owned Tokio runtime
pub struct ConnectionManager {
    /// Tokio runtime for MongoDB async operations
    pub(crate) runtime: Runtime,
}

impl ConnectionManager {
    /// Create a new connection manager
    pub fn new() -> Result<Self> {
        let runtime = Runtime::new()?;
        Ok(Self { runtime })
    }

    /// Connect and ping within the configured timeout (runs in Tokio runtime)
    pub fn connect(&self, config: &BookstoreConfig) -> Result<Client> {
        let uri = config.uri.clone();
        let timeout = config.connect_timeout();
        log::info!("Connecting to MongoDB");

        self.runtime.block_on(async {
            let fut = async {
                let client = Client::with_uri_str(&uri).await?;

                // Ping to verify connection
                client.database("admin").run_command(doc! { "ping": 1 }).await?;

                Ok::<Client, mongodb::error::Error>(client)
            };

            match tokio::time::timeout(timeout, fut).await {
                Ok(result) => result.map_err(Error::from),
                Err(_) => Err(Error::Timeout(format!(
                    "Connection timed out after {}s",
                    timeout.as_secs()
                ))),
            }
        })
    }

    /// Shut the client down, waiting for in-flight operations (runs in Tokio runtime)
    pub fn disconnect(&self, client: Client) {
        self.runtime.block_on(async move { client.shutdown().await });
        log::info!("Disconnected");
    }
}
