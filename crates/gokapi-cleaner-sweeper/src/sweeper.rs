use std::fmt;
use std::future::Future;

use gokapi_cleaner_core::{select_expired, unix_now, FileRecord};
use gokapi_cleaner_service::{FileService, ServiceError};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("listing files failed: {0}")]
    ListFailed(#[source] ServiceError),

    #[error("removal of file '{name}' (id {id}) failed: {source}")]
    DeleteFailed {
        id: String,
        name: String,
        #[source]
        source: ServiceError,
    },

    #[error("interrupted by user")]
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepPhase {
    Idle,
    Listing,
    Filtering,
    Deleting,
    Done,
    Failed,
}

impl fmt::Display for SweepPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SweepPhase::Idle => "idle",
            SweepPhase::Listing => "listing",
            SweepPhase::Filtering => "filtering",
            SweepPhase::Deleting => "deleting",
            SweepPhase::Done => "done",
            SweepPhase::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Outcome of a successful sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    pub listed: usize,
    pub expired: usize,
    pub deleted: usize,
    pub dry_run: bool,
}

/// One list → filter → delete pass against a file service.
///
/// Deletes are sent one at a time; the first failure ends the sweep and
/// nothing already deleted is restored.
pub struct Sweeper<'a> {
    service: &'a dyn FileService,
    dry_run: bool,
    phase: SweepPhase,
    clock: Box<dyn Fn() -> i64 + Send + Sync + 'a>,
}

impl<'a> Sweeper<'a> {
    pub fn new(service: &'a dyn FileService, dry_run: bool) -> Self {
        Self {
            service,
            dry_run,
            phase: SweepPhase::Idle,
            clock: Box::new(unix_now),
        }
    }

    /// Replace the Unix-seconds clock read when filtering starts.
    pub fn with_clock(mut self, clock: impl Fn() -> i64 + Send + Sync + 'a) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn phase(&self) -> SweepPhase {
        self.phase
    }

    fn enter(&mut self, phase: SweepPhase) {
        debug!("sweep phase: {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    /// Run a full sweep. The clock is read once, after the listing arrives,
    /// and every expiry is compared against that instant.
    pub async fn run(&mut self) -> Result<SweepReport, SweepError> {
        let files = self.list().await?;

        self.enter(SweepPhase::Filtering);
        let now = (self.clock)();
        debug!("using current timestamp: {now}");
        let expired = select_expired(&files, now);
        info!("searched through all files");
        info!("found {} files to be removed", expired.len());

        let deleted = self.delete_all(&expired).await?;
        self.enter(SweepPhase::Done);

        Ok(SweepReport {
            listed: files.len(),
            expired: expired.len(),
            deleted,
            dry_run: self.dry_run,
        })
    }

    /// Like `run`, but gives up with `Interrupted` as soon as `shutdown` resolves.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<SweepReport, SweepError>
    where
        F: Future<Output = ()>,
    {
        let outcome = tokio::select! {
            biased;
            _ = shutdown => None,
            result = self.run() => Some(result),
        };
        match outcome {
            Some(result) => result,
            None => {
                self.enter(SweepPhase::Failed);
                Err(SweepError::Interrupted)
            }
        }
    }

    async fn list(&mut self) -> Result<Vec<FileRecord>, SweepError> {
        self.enter(SweepPhase::Listing);
        info!("start searching for files");
        match self.service.list_files().await {
            Ok(files) => {
                debug!("listing returned {} files", files.len());
                Ok(files)
            }
            Err(e) => {
                self.enter(SweepPhase::Failed);
                Err(SweepError::ListFailed(e))
            }
        }
    }

    async fn delete_all(&mut self, expired: &[FileRecord]) -> Result<usize, SweepError> {
        if expired.is_empty() {
            info!("no files to remove found");
            return Ok(0);
        }

        self.enter(SweepPhase::Deleting);
        info!("starting removal of files");
        let mut deleted = 0;
        for file in expired {
            debug!("removing file '{}' with id {}", file.name, file.id);
            if self.dry_run {
                info!("test run, no command executed for '{}'", file.name);
                continue;
            }
            if let Err(e) = self.service.delete_file(&file.id).await {
                self.enter(SweepPhase::Failed);
                return Err(SweepError::DeleteFailed {
                    id: file.id.clone(),
                    name: file.name.clone(),
                    source: e,
                });
            }
            deleted += 1;
        }
        info!("all files cleared");
        Ok(deleted)
    }
}
