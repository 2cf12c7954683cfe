use crate::ports::{JobLog, StoreHealthPort};
use chrono::{DateTime, Local, Utc};
use crm_jobs_domain::{DatabaseHealth, DomainError, Heartbeat, LoggedRun};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case: record that the CRM is alive, along with database reachability.
/// An unreachable database is reported in the entry, not returned as an error.
pub struct HeartbeatUseCase {
    store: Arc<dyn StoreHealthPort>,
    job_log: Arc<dyn JobLog>,
}

impl HeartbeatUseCase {
    pub fn new(store: Arc<dyn StoreHealthPort>, job_log: Arc<dyn JobLog>) -> Self {
        Self { store, job_log }
    }

    pub async fn execute(&self) -> Result<LoggedRun<Heartbeat>, DomainError> {
        self.execute_at(Utc::now()).await
    }

    pub async fn execute_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<LoggedRun<Heartbeat>, DomainError> {
        let database = match self.store.ping().await {
            Ok(()) => DatabaseHealth::Ok,
            Err(e) => {
                warn!(error = %e, "Database ping failed");
                DatabaseHealth::Unreachable(e.to_string())
            }
        };

        let heartbeat = Heartbeat { database };
        let entry = heartbeat.log_entry(&now.with_timezone(&Local));
        self.job_log.append(&entry).await?;

        info!(
            database_ok = heartbeat.database == DatabaseHealth::Ok,
            "Heartbeat logged"
        );
        Ok(LoggedRun {
            outcome: heartbeat,
            entry,
        })
    }
}
