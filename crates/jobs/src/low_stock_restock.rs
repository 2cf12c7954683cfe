use crm_jobs_application::use_cases::RestockLowStockUseCase;
use crm_jobs_domain::RestockPolicy;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub struct LowStockRestockJob {
    restock: Arc<RestockLowStockUseCase>,
    policy: RestockPolicy,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl LowStockRestockJob {
    pub fn new(restock: Arc<RestockLowStockUseCase>, policy: RestockPolicy) -> Self {
        Self {
            restock,
            policy,
            interval_secs: 43_200,
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
            threshold = self.policy.threshold,
            increment = self.policy.increment,
            "Starting low stock restock job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("LowStockRestockJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.restock.execute(self.policy).await {
                            Ok(summary) => {
                                info!(restocked = summary.products.len(), "Low stock restock completed");
                            }
                            Err(e) => {
                                error!(error = %e, "Low stock restock failed");
                            }
                        }
                    }
                }
            }
        })
    }
}
