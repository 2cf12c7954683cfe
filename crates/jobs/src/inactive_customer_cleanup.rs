use crm_jobs_application::use_cases::CleanupInactiveCustomersUseCase;
use crm_jobs_domain::InactivityPolicy;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_INTERVAL_SECS: u64 = 7 * 86_400;

/// Background job that periodically deletes inactive customers
pub struct InactiveCustomerCleanupJob {
    cleanup: Arc<CleanupInactiveCustomersUseCase>,
    policy: InactivityPolicy,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl InactiveCustomerCleanupJob {
    pub fn new(cleanup: Arc<CleanupInactiveCustomersUseCase>, policy: InactivityPolicy) -> Self {
        Self {
            cleanup,
            policy,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            window_days = self.policy.window_days,
            interval_secs = self.interval_secs,
            "Starting inactive customer cleanup job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("InactiveCustomerCleanupJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.cleanup.execute(self.policy, false).await {
                            Ok(summary) => {
                                info!(deleted = summary.deleted, "Inactive customer cleanup completed");
                            }
                            Err(e) => {
                                error!(error = %e, "Inactive customer cleanup failed");
                            }
                        }
                    }
                }
            }
        })
    }
}
