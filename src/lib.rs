//! A guided tour of MongoDB reads, writes, aggregations and indexes over a
//! books collection.

pub mod config;
pub mod connection;
pub mod error;
pub mod explain;
pub mod report;
pub mod runner;
pub mod tour;

pub use config::BookstoreConfig;
pub use connection::ConnectionManager;
pub use error::{Error, Result};
