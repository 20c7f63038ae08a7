use async_trait::async_trait;
use gokapi_cleaner_core::FileRecord;
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::debug;

use crate::{FileService, ServiceError};

/// reqwest client for the Gokapi REST API.
pub struct HttpFileService {
    base_url: String,
    client: Client,
    api_key: String,
}

impl HttpFileService {
    pub fn new(base_url: &str, api_key: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("accept", "application/json")
            .header("apikey", self.api_key.as_str())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl FileService for HttpFileService {
    async fn list_files(&self) -> Result<Vec<FileRecord>, ServiceError> {
        let url = self.url("/files/list");
        debug!("used url: {url}");
        let resp = self
            .with_auth(self.client.get(url))
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ServiceError::Status(status));
        }
        let body = resp
            .bytes()
            .await
            .map_err(|e| ServiceError::Transport(format!("read body: {e}")))?;
        serde_json::from_slice(&body).map_err(|e| ServiceError::Decode(e.to_string()))
    }

    async fn delete_file(&self, id: &str) -> Result<(), ServiceError> {
        let builder = self.client.delete(self.url("/files/delete")).header("id", id);
        let resp = self
            .with_auth(builder)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        match resp.status() {
            StatusCode::OK => Ok(()),
            status => Err(ServiceError::Status(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let svc = HttpFileService::new("http://localhost/api/", "k".into());
        assert_eq!(svc.base_url(), "http://localhost/api");
        assert_eq!(svc.url("/files/list"), "http://localhost/api/files/list");
    }

    #[test]
    fn status_error_mentions_code() {
        let err = ServiceError::Status(StatusCode::UNAUTHORIZED);
        assert!(err.to_string().contains("401"));
    }
}
