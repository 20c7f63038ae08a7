use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use gokapi_cleaner_core::FileRecord;
use reqwest::StatusCode;

use crate::{FileService, ServiceError};

/// An in-memory file service for testing that tracks list/delete calls
/// and returns configurable failures.
///
/// A successful delete removes the record from the listing, so a second
/// sweep sees the remote state the first one left behind.
pub struct MockFileService {
    files: Mutex<Vec<FileRecord>>,
    deleted: Mutex<Vec<String>>,
    list_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    list_fail: Option<StatusCode>,
    delete_fail: Option<(String, DeleteFailure)>,
}

type DeleteFailure = Box<dyn Fn() -> ServiceError + Send + Sync>;

impl Default for MockFileService {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MockFileService {
    pub fn new(files: Vec<FileRecord>) -> Self {
        Self {
            files: Mutex::new(files),
            deleted: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            list_fail: None,
            delete_fail: None,
        }
    }

    pub fn with_list_fail(mut self, status: StatusCode) -> Self {
        self.list_fail = Some(status);
        self
    }

    /// Make the delete for `id` answer with `status`.
    pub fn with_delete_fail(mut self, id: &str, status: StatusCode) -> Self {
        self.delete_fail = Some((
            id.to_string(),
            Box::new(move || ServiceError::Status(status)),
        ));
        self
    }

    /// Make the delete for `id` fail before any response arrives.
    pub fn with_delete_transport_fail(mut self, id: &str) -> Self {
        self.delete_fail = Some((
            id.to_string(),
            Box::new(|| ServiceError::Transport("connection reset by peer".into())),
        ));
        self
    }

    /// Ids successfully deleted so far, in call order.
    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> Vec<FileRecord> {
        self.files.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Every delete attempt, including failed ones.
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileService for MockFileService {
    async fn list_files(&self) -> Result<Vec<FileRecord>, ServiceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.list_fail {
            return Err(ServiceError::Status(status));
        }
        Ok(self.files.lock().unwrap().clone())
    }

    async fn delete_file(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some((fail_id, failure)) = &self.delete_fail {
            if fail_id == id {
                return Err(failure());
            }
        }
        let mut files = self.files.lock().unwrap();
        let before = files.len();
        files.retain(|f| f.id != id);
        if files.len() == before {
            return Err(ServiceError::Status(StatusCode::NOT_FOUND));
        }
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }
}
