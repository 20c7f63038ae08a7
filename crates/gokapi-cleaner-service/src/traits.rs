use async_trait::async_trait;
use gokapi_cleaner_core::FileRecord;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unexpected response status: {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// The two Gokapi API calls a sweep needs.
///
/// `HttpFileService` talks to a real instance.
/// `MockFileService` keeps an in-memory listing for tests.
#[async_trait]
pub trait FileService: Send + Sync {
    /// Fetch the full file listing. Only a 200 reply counts as success.
    async fn list_files(&self) -> Result<Vec<FileRecord>, ServiceError>;

    /// Permanently delete the file with the given id. Only a 200 reply counts as success.
    async fn delete_file(&self, id: &str) -> Result<(), ServiceError>;
}
