use serde::{Deserialize, Serialize};
use std::path::Path;

/// Typed view of a backend document record.
///
/// The client itself passes bodies through as raw JSON; decode into this
/// when field access is wanted. Everything except the id is optional so
/// older or partial records still decode.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub recognized_text: Option<String>,
    #[serde(default)]
    pub file_hash: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body returned by `POST /upload`, both for new files and for duplicates.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UploadResponse {
    pub message: String,
    pub document: Document,
}

/// Partial update for `PUT /documents/{id}`; unset fields are left untouched by the backend.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognized_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TagRequest {
    pub tag: String,
}

/// A file to send as the `file` part of an upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            data,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Read a file from disk, naming the part after the file's base name.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::new(file_name, data))
    }
}

/// The backend only accepts PNG and JPEG; anything else goes out as octet-stream.
fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_decodes_backend_record() {
        let body = json!({
            "_id": "65f1c2",
            "filename": "20240101_120000_scan.png",
            "path": "backend/uploads/20240101_120000_scan.png",
            "recognized_text": "Invoice #42",
            "file_hash": "d41d8cd98f00b204e9800998ecf8427e",
            "created_at": "2024-01-01T12:00:00",
            "tags": ["invoice"]
        });

        let document: Document = serde_json::from_value(body).unwrap();
        assert_eq!(document.id, "65f1c2");
        assert_eq!(document.recognized_text.as_deref(), Some("Invoice #42"));
        assert_eq!(document.tags, vec!["invoice".to_string()]);
    }

    #[test]
    fn test_document_tolerates_missing_fields() {
        let document: Document = serde_json::from_value(json!({ "_id": "abc" })).unwrap();
        assert!(document.filename.is_none());
        assert!(document.tags.is_empty());
    }

    #[test]
    fn test_update_omits_unset_fields() {
        let update = DocumentUpdate {
            tags: Some(vec!["receipt".to_string()]),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "tags": ["receipt"] })
        );
    }

    #[test]
    fn test_content_type_inferred_from_extension() {
        assert_eq!(UploadFile::new("scan.PNG", vec![]).content_type, "image/png");
        assert_eq!(UploadFile::new("photo.jpeg", vec![]).content_type, "image/jpeg");
        assert_eq!(UploadFile::new("photo.jpg", vec![]).content_type, "image/jpeg");
        assert_eq!(
            UploadFile::new("notes.txt", vec![]).content_type,
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn test_from_path_reads_bytes_and_name() {
        let path = std::env::temp_dir().join(format!("upload-{}.png", std::process::id()));
        tokio::fs::write(&path, b"\x89PNG").await.unwrap();

        let file = UploadFile::from_path(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(file.data, b"\x89PNG".to_vec());
        assert_eq!(file.content_type, "image/png");
        assert!(file.file_name.ends_with(".png"));
    }
}
