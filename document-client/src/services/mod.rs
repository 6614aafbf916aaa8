pub mod document_client;
pub mod metrics;

pub use document_client::DocumentClient;
