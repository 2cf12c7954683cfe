use async_trait::async_trait;
use crm_jobs_application::ports::JobLog;
use crm_jobs_domain::DomainError;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

/// Job log backed by a plain text file opened in append mode on every write.
pub struct FileJobLog {
    path: PathBuf,
}

impl FileJobLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl JobLog for FileJobLog {
    async fn append(&self, entry: &str) -> Result<(), DomainError> {
        let io_error = |e: std::io::Error| {
            error!(error = %e, path = %self.path.display(), "Failed to write job log");
            DomainError::IoError(format!("{}: {}", self.path.display(), e))
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(io_error)?;

        // One write per entry keeps entries whole in the file.
        file.write_all(entry.as_bytes()).await.map_err(io_error)?;
        file.flush().await.map_err(io_error)?;

        debug!(path = %self.path.display(), bytes = entry.len(), "Job log entry appended");
        Ok(())
    }
}
