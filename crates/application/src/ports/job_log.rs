use async_trait::async_trait;
use crm_jobs_domain::DomainError;

/// Append-only sink receiving one entry per job run.
#[async_trait]
pub trait JobLog: Send + Sync {
    async fn append(&self, entry: &str) -> Result<(), DomainError>;
}
