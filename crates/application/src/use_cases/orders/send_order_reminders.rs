use crate::ports::{JobLog, OrderRepository};
use chrono::{DateTime, Local, Utc};
use crm_jobs_domain::order::reminder_window_start;
use crm_jobs_domain::{DomainError, ReminderSummary};
use std::sync::Arc;
use tracing::info;

/// Use case: log a reminder line for every order placed in the last N days.
pub struct SendOrderRemindersUseCase {
    order_repo: Arc<dyn OrderRepository>,
    job_log: Arc<dyn JobLog>,
}

impl SendOrderRemindersUseCase {
    pub fn new(order_repo: Arc<dyn OrderRepository>, job_log: Arc<dyn JobLog>) -> Self {
        Self {
            order_repo,
            job_log,
        }
    }

    pub async fn execute(&self, window_days: u32) -> Result<ReminderSummary, DomainError> {
        self.execute_at(Utc::now(), window_days).await
    }

    pub async fn execute_at(
        &self,
        now: DateTime<Utc>,
        window_days: u32,
    ) -> Result<ReminderSummary, DomainError> {
        let since = reminder_window_start(now, window_days)?;
        let orders = self.order_repo.find_placed_since(since).await?;

        let summary = ReminderSummary {
            window_days,
            orders,
        };
        self.job_log
            .append(&summary.log_entry(&now.with_timezone(&Local)))
            .await?;

        info!(
            pending = summary.orders.len(),
            window_days, "Order reminders processed"
        );
        Ok(summary)
    }
}
