use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_domain::{Cents, DomainError, PendingOrder};

/// Aggregate figures over every stored order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderTotals {
    pub count: u64,
    pub revenue: Cents,
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Orders dated on or after `since`, newest first
    async fn find_placed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<PendingOrder>, DomainError>;

    async fn totals(&self) -> Result<OrderTotals, DomainError>;
}
