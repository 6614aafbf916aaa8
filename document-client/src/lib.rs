//! Client for the document scanning backend plus the UI display preference store.
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod stores;

pub use error::ClientError;
pub use services::document_client::DocumentClient;
pub use stores::{DisplayPreferences, Subscription, Writable, DISPLAY_PREFERENCES};
