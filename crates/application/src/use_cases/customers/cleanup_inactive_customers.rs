use crate::ports::{CustomerRepository, JobLog};
use chrono::{DateTime, Local, Utc};
use crm_jobs_domain::{CleanupSummary, DomainError, InactivityPolicy};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Use case: delete customers with no orders, or none inside the inactivity
/// window, and record the count in the cleanup log.
pub struct CleanupInactiveCustomersUseCase {
    customer_repo: Arc<dyn CustomerRepository>,
    job_log: Arc<dyn JobLog>,
}

impl CleanupInactiveCustomersUseCase {
    pub fn new(customer_repo: Arc<dyn CustomerRepository>, job_log: Arc<dyn JobLog>) -> Self {
        Self {
            customer_repo,
            job_log,
        }
    }

    pub async fn execute(
        &self,
        policy: InactivityPolicy,
        dry_run: bool,
    ) -> Result<CleanupSummary, DomainError> {
        self.execute_at(Utc::now(), policy, dry_run).await
    }

    pub async fn execute_at(
        &self,
        now: DateTime<Utc>,
        policy: InactivityPolicy,
        dry_run: bool,
    ) -> Result<CleanupSummary, DomainError> {
        let cutoff = policy.cutoff(now)?;

        let without_orders = self.customer_repo.find_without_orders().await?;
        let without_recent = self.customer_repo.find_without_orders_since(cutoff).await?;
        debug!(
            without_orders = without_orders.len(),
            without_recent = without_recent.len(),
            "Inactive customer candidates collected"
        );

        let inactive_ids: Vec<i64> = without_orders
            .into_iter()
            .chain(without_recent)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if dry_run {
            info!(
                candidates = inactive_ids.len(),
                window_days = policy.window_days,
                "Dry run: no customers deleted"
            );
            return Ok(CleanupSummary {
                cutoff,
                inactive_ids,
                deleted: 0,
                dry_run: true,
            });
        }

        let deleted = if inactive_ids.is_empty() {
            0
        } else {
            self.customer_repo.delete_by_ids(&inactive_ids).await?
        };

        let summary = CleanupSummary {
            cutoff,
            inactive_ids,
            deleted,
            dry_run: false,
        };
        self.job_log
            .append(&summary.log_entry(&now.with_timezone(&Local)))
            .await?;

        info!(
            deleted,
            window_days = policy.window_days,
            cutoff = %cutoff,
            "Inactive customers cleaned up"
        );
        Ok(summary)
    }
}
