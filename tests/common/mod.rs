//! Common test utilities and fixtures for integration tests using Testcontainers.
//!
//! A single MongoDB 7.0 container is shared per test binary (Rust compiles each
//! `tests/*.rs` file as a separate binary). Per-test isolation is achieved by
//! namespacing every database name with a short UUID suffix.
//!
//! The container runs on a dedicated background thread with its own tokio runtime.
//! Tests drive the crate through `ConnectionManager`, which blocks on its own
//! runtime, so test functions are plain `#[test]`s.
//!
//! An `atexit` hook ensures the container is removed when the process exits.

#![allow(dead_code)]

pub mod fixtures;

use bookstore_queries::connection::FindDocumentsOptions;
use bookstore_queries::tour::{Operation, tour};
use bookstore_queries::{BookstoreConfig, ConnectionManager};
use mongodb::bson::{Document, doc};
use mongodb::{Client, options::ClientOptions};
use std::sync::OnceLock;
use testcontainers::ImageExt;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mongo::Mongo;

/// Connection info for the shared container.
struct SharedContainer {
    connection_string: String,
}

static SHARED: OnceLock<SharedContainer> = OnceLock::new();

/// Docker container ID — stored globally so the `atexit` handler can remove it.
static CONTAINER_ID: OnceLock<String> = OnceLock::new();

unsafe extern "C" {
    fn atexit(f: extern "C" fn()) -> i32;
}

/// Called by the C runtime on process exit. Forcibly removes the shared container.
extern "C" fn remove_container() {
    if let Some(id) = CONTAINER_ID.get() {
        let _ = std::process::Command::new("docker")
            .args(["rm", "-f", id])
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status();
    }
}

/// Initialize the shared container (called once per test binary).
fn get_or_init_shared() -> &'static SharedContainer {
    SHARED.get_or_init(|| {
        let (tx, rx) = std::sync::mpsc::sync_channel(1);

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create container runtime");

            rt.block_on(async {
                let container = Mongo::default()
                    .with_tag("7.0")
                    .start()
                    .await
                    .expect("Failed to start MongoDB container");

                let _ = CONTAINER_ID.set(container.id().to_string());
                unsafe {
                    atexit(remove_container);
                }

                let host = container.get_host().await.expect("Failed to get host");
                let port = container.get_host_port_ipv4(27017).await.expect("Failed to get port");
                let connection_string = format!("mongodb://{}:{}", host, port);

                // Wait until the server answers
                let opts = ClientOptions::parse(&connection_string).await.expect("Failed to parse");
                let ready_client =
                    Client::with_options(opts).expect("Failed to create readiness client");
                for _ in 0..30 {
                    if ready_client.list_database_names().await.is_ok() {
                        break;
                    }
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                }
                drop(ready_client);

                tx.send(connection_string).expect("Failed to send connection string");

                // Park forever — keeps the container alive until the process exits.
                std::future::pending::<()>().await;
            });
        });

        SharedContainer {
            connection_string: rx.recv().expect("Failed to receive connection string"),
        }
    })
}

/// A connected `ConnectionManager` against the shared container, with a
/// per-test database name.
pub struct MongoTestContainer {
    pub manager: ConnectionManager,
    pub client: Client,
    pub config: BookstoreConfig,
}

impl MongoTestContainer {
    /// Connect to the shared container with a unique database for this test.
    pub fn start() -> Self {
        let config = Self::config_for("plp_bookstore");
        let manager = ConnectionManager::new().expect("Failed to create connection manager");
        let client = manager.connect(&config).expect("Failed to connect");
        Self { manager, client, config }
    }

    /// A config aimed at the shared container with a namespaced database.
    pub fn config_for(database: &str) -> BookstoreConfig {
        let shared = get_or_init_shared();

        // Use first 8 chars of UUID v4 as a short, unique namespace suffix.
        let test_id = uuid::Uuid::new_v4().to_string()[..8].to_string();

        BookstoreConfig::new(shared.connection_string.clone(), format!("{database}_{test_id}"))
    }

    pub fn database(&self) -> &str {
        &self.config.database
    }

    pub fn collection(&self) -> &str {
        &self.config.collection
    }

    /// Insert fixture documents into the books collection.
    pub fn seed(&self, documents: Vec<Document>) {
        self.manager
            .insert_documents(&self.client, self.database(), self.collection(), documents)
            .expect("Failed to seed books");
    }

    pub fn find(&self, opts: FindDocumentsOptions) -> Vec<Document> {
        self.manager
            .find_documents(&self.client, self.database(), self.collection(), opts)
            .expect("Failed to find books")
    }

    pub fn find_by_title(&self, title: &str) -> Option<Document> {
        self.find(FindDocumentsOptions::filter(doc! { "title": title })).into_iter().next()
    }

    pub fn shutdown(self) {
        self.manager.disconnect(self.client);
    }
}

/// Look up a tour step's operation by its printed title.
pub fn tour_operation(title: &str) -> Operation {
    tour()
        .into_iter()
        .flat_map(|section| section.steps)
        .find(|step| step.title == title)
        .map(|step| step.operation)
        .unwrap_or_else(|| panic!("No tour step titled {title:?}"))
}

/// Titles of a result set, in result order.
pub fn titles(documents: &[Document]) -> Vec<String> {
    documents.iter().filter_map(|doc| doc.get_str("title").ok().map(str::to_string)).collect()
}

impl MongoTestContainer {
    /// Run the tour's `find` step with this title.
    pub fn run_find_step(&self, title: &str) -> Vec<Document> {
        match tour_operation(title) {
            Operation::Find(opts) => self.find(opts),
            other => panic!("Step {title:?} is not a find: {other:?}"),
        }
    }

    /// Run the tour's aggregation step with this title.
    pub fn run_aggregate_step(&self, title: &str) -> Vec<Document> {
        match tour_operation(title) {
            Operation::Aggregate { pipeline } => self
                .manager
                .aggregate(&self.client, self.database(), self.collection(), pipeline)
                .expect("Failed to aggregate"),
            other => panic!("Step {title:?} is not an aggregation: {other:?}"),
        }
    }
}
