use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_domain::DomainError;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Ids of customers that have never placed an order
    async fn find_without_orders(&self) -> Result<Vec<i64>, DomainError>;

    /// Ids of customers with no order dated on or after `cutoff`
    async fn find_without_orders_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<i64>, DomainError>;

    /// Delete the given customers (their orders go with them), returning rows removed
    async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
