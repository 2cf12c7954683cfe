use async_trait::async_trait;
use crm_jobs_domain::DomainError;

#[async_trait]
pub trait StoreHealthPort: Send + Sync {
    /// Cheap round trip proving the store answers queries
    async fn ping(&self) -> Result<(), DomainError>;
}
