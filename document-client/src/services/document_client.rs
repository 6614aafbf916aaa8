//! HTTP client for the document scanning backend.
//!
//! Each method maps to exactly one backend request. Only `update_document`
//! and the tag calls look at the response status; upload, list and search
//! hand back whatever JSON the backend sent, and delete ignores the response.

use crate::config::ApiSettings;
use crate::error::ClientError;
use crate::models::{TagRequest, UploadFile};
use crate::services::metrics;
use client_core::observability::{TracedClientExt, TracedRequest};
use reqwest::{multipart, Client, Response, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

/// Document client talking JSON over HTTP to the backend API root.
#[derive(Clone)]
pub struct DocumentClient {
    client: Client,
    base_url: String,
}

impl DocumentClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), settings)
    }

    /// Build on top of an existing reqwest client to share its connection pool.
    pub fn with_client(client: Client, settings: ApiSettings) -> Result<Self, ClientError> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();

        let parsed = Url::parse(&base_url).map_err(|e| {
            tracing::error!(base_url = %settings.base_url, error = %e, "Rejected document API base URL");
            ClientError::InvalidBaseUrl(format!("{}: {}", settings.base_url, e))
        })?;

        // `localhost:8000/api` parses with scheme `localhost`
        if !matches!(parsed.scheme(), "http" | "https") {
            tracing::error!(base_url = %settings.base_url, scheme = %parsed.scheme(), "Rejected document API base URL");
            return Err(ClientError::InvalidBaseUrl(format!(
                "{}: scheme must be http or https",
                settings.base_url
            )));
        }

        tracing::debug!(base_url = %base_url, "Document client configured");

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL used by `search_documents`. The query is appended verbatim, without percent-encoding.
    pub fn search_url(&self, query: &str) -> String {
        format!("{}/search?q={}", self.base_url, query)
    }

    fn document_url(&self, document_id: &str) -> String {
        format!("{}/documents/{}", self.base_url, document_id)
    }

    /// Upload a file as the multipart `file` field.
    ///
    /// Returns the backend's JSON body, which also covers the "already exists" case.
    #[instrument(skip(self, file), fields(file_name = %file.file_name, size = file.data.len()))]
    pub async fn upload(&self, file: UploadFile) -> Result<Value, ClientError> {
        let part = multipart::Part::bytes(file.data)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|_| ClientError::InvalidContentType(file.content_type.clone()))?;
        let form = multipart::Form::new().part("file", part);

        let url = format!("{}/upload", self.base_url);
        let response = self
            .send("upload", self.client.traced_post(&url).multipart(form))
            .await?;

        read_json("upload", response).await
    }

    /// Read a file from disk and upload it.
    pub async fn upload_path(&self, path: impl AsRef<std::path::Path>) -> Result<Value, ClientError> {
        let file = UploadFile::from_path(path).await?;
        self.upload(file).await
    }

    #[instrument(skip(self))]
    pub async fn list_documents(&self) -> Result<Value, ClientError> {
        let url = format!("{}/documents", self.base_url);
        let response = self
            .send("list_documents", self.client.traced_get(&url))
            .await?;

        read_json("list_documents", response).await
    }

    /// Delete a document. Resolves once the backend answers, whatever the status.
    #[instrument(skip(self), fields(document_id = %document_id))]
    pub async fn delete_document(&self, document_id: &str) -> Result<(), ClientError> {
        let url = self.document_url(document_id);
        let response = self
            .send("delete_document", self.client.traced_delete(&url))
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                document_id = %document_id,
                status = %status,
                "Backend rejected delete; ignoring"
            );
        }

        Ok(())
    }

    /// Replace fields on a document with `data` sent as JSON.
    ///
    /// Fails with [`ClientError::UpdateFailed`] on any non-2xx status without reading the body.
    #[instrument(skip(self, data), fields(document_id = %document_id))]
    pub async fn update_document<T: Serialize + ?Sized>(
        &self,
        document_id: &str,
        data: &T,
    ) -> Result<Value, ClientError> {
        let url = self.document_url(document_id);
        let response = self
            .send("update_document", self.client.traced_put(&url).json(data))
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(document_id = %document_id, status = %status, "Document update failed");
            return Err(ClientError::UpdateFailed { status });
        }

        read_json("update_document", response).await
    }

    /// Search by text, file name or tag.
    #[instrument(skip(self))]
    pub async fn search_documents(&self, query: &str) -> Result<Value, ClientError> {
        let url = self.search_url(query);
        let response = self
            .send("search_documents", self.client.traced_get(&url))
            .await?;

        read_json("search_documents", response).await
    }

    /// Attach a tag. The backend lowercases and de-duplicates it.
    #[instrument(skip(self), fields(document_id = %document_id))]
    pub async fn add_tag(&self, document_id: &str, tag: &str) -> Result<Value, ClientError> {
        let url = format!("{}/tags", self.document_url(document_id));
        let body = TagRequest {
            tag: tag.to_string(),
        };
        let response = self
            .send("add_tag", self.client.traced_post(&url).json(&body))
            .await?;

        checked_tag_response("add_tag", response).await
    }

    #[instrument(skip(self), fields(document_id = %document_id))]
    pub async fn remove_tag(&self, document_id: &str, tag: &str) -> Result<Value, ClientError> {
        let url = format!("{}/tags", self.document_url(document_id));
        let body = TagRequest {
            tag: tag.to_string(),
        };
        let response = self
            .send("remove_tag", self.client.traced_delete(&url).json(&body))
            .await?;

        checked_tag_response("remove_tag", response).await
    }

    async fn send(
        &self,
        operation: &'static str,
        request: TracedRequest,
    ) -> Result<Response, ClientError> {
        let request_id = request.request_id().to_string();

        match request.send().await {
            Ok(response) => {
                metrics::record_response(operation, response.status());
                tracing::debug!(
                    operation,
                    request_id = %request_id,
                    status = %response.status(),
                    "Backend responded"
                );
                Ok(response)
            }
            Err(e) => {
                metrics::record_transport_error(operation);
                tracing::error!(
                    operation,
                    request_id = %request_id,
                    error = %e,
                    "Failed to reach document backend"
                );
                Err(ClientError::Transport(e))
            }
        }
    }
}

async fn read_json(operation: &'static str, response: Response) -> Result<Value, ClientError> {
    response.json::<Value>().await.map_err(|e| {
        tracing::error!(operation, error = %e, "Backend returned a non-JSON body");
        ClientError::Decode(e)
    })
}

async fn checked_tag_response(
    operation: &'static str,
    response: Response,
) -> Result<Value, ClientError> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(operation, status = %status, "Tag request rejected");
        return Err(ClientError::TagRequestFailed { status });
    }

    read_json(operation, response).await
}
