//! MongoDB connection management and operations.
//!
//! This module provides:
//! - `ConnectionManager`: owns the Tokio runtime, connects and disconnects
//! - `ops`: collection operations (documents, aggregation, indexes, explain)
//! - `types`: option types shared by the operations

pub mod manager;
pub mod ops;
pub mod types;

pub use manager::ConnectionManager;
pub use ops::explain::ExplainFindRequest;
pub use types::{ExplainVerbosity, FindDocumentsOptions};
