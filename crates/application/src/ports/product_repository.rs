use async_trait::async_trait;
use crm_jobs_domain::{DomainError, RestockPolicy, RestockedProduct};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Add `policy.increment` to every product whose stock is below
    /// `policy.threshold`, all-or-nothing. Returns the new stock levels.
    async fn restock_below(
        &self,
        policy: RestockPolicy,
    ) -> Result<Vec<RestockedProduct>, DomainError>;
}
