pub mod document;

pub use document::{Document, DocumentUpdate, TagRequest, UploadFile, UploadResponse};
