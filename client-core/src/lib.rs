//! client-core: Shared infrastructure for the document client crates.
pub mod config;
pub mod error;
pub mod observability;

pub use reqwest;
pub use tracing;
