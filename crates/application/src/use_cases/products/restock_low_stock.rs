use crate::ports::{JobLog, ProductRepository};
use chrono::{DateTime, Local, Utc};
use crm_jobs_domain::{DomainError, RestockPolicy, RestockSummary};
use std::sync::Arc;
use tracing::info;

pub struct RestockLowStockUseCase {
    product_repo: Arc<dyn ProductRepository>,
    job_log: Arc<dyn JobLog>,
}

impl RestockLowStockUseCase {
    pub fn new(product_repo: Arc<dyn ProductRepository>, job_log: Arc<dyn JobLog>) -> Self {
        Self {
            product_repo,
            job_log,
        }
    }

    pub async fn execute(&self, policy: RestockPolicy) -> Result<RestockSummary, DomainError> {
        self.execute_at(Utc::now(), policy).await
    }

    pub async fn execute_at(
        &self,
        now: DateTime<Utc>,
        policy: RestockPolicy,
    ) -> Result<RestockSummary, DomainError> {
        let products = self.product_repo.restock_below(policy).await?;

        let summary = RestockSummary {
            threshold: policy.threshold,
            increment: policy.increment,
            products,
        };
        self.job_log
            .append(&summary.log_entry(&now.with_timezone(&Local)))
            .await?;

        info!(
            restocked = summary.products.len(),
            threshold = policy.threshold,
            increment = policy.increment,
            "Low stock products restocked"
        );
        Ok(summary)
    }
}
