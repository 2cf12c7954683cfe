use crate::ports::{CustomerRepository, JobLog, OrderRepository};
use chrono::{DateTime, Local, Utc};
use crm_jobs_domain::{CrmReport, DomainError, LoggedRun};
use std::sync::Arc;
use tracing::info;

/// Use case: summarise customers, orders and revenue into the report log.
pub struct GenerateCrmReportUseCase {
    customer_repo: Arc<dyn CustomerRepository>,
    order_repo: Arc<dyn OrderRepository>,
    job_log: Arc<dyn JobLog>,
}

impl GenerateCrmReportUseCase {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        order_repo: Arc<dyn OrderRepository>,
        job_log: Arc<dyn JobLog>,
    ) -> Self {
        Self {
            customer_repo,
            order_repo,
            job_log,
        }
    }

    pub async fn execute(&self) -> Result<LoggedRun<CrmReport>, DomainError> {
        self.execute_at(Utc::now()).await
    }

    pub async fn execute_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<LoggedRun<CrmReport>, DomainError> {
        let customers = self.customer_repo.count().await?;
        let totals = self.order_repo.totals().await?;

        let report = CrmReport {
            customers,
            orders: totals.count,
            revenue: totals.revenue,
        };
        let entry = report.log_entry(&now.with_timezone(&Local));
        self.job_log.append(&entry).await?;

        info!(
            customers,
            orders = totals.count,
            revenue = %totals.revenue,
            "CRM report generated"
        );
        Ok(LoggedRun {
            outcome: report,
            entry,
        })
    }
}
