use crm_jobs_application::use_cases::HeartbeatUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub struct HeartbeatJob {
    heartbeat: Arc<HeartbeatUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl HeartbeatJob {
    pub fn new(heartbeat: Arc<HeartbeatUseCase>) -> Self {
        Self {
            heartbeat,
            interval_secs: 300,
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
        info!(interval_secs = self.interval_secs, "Starting heartbeat job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("HeartbeatJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = self.heartbeat.execute().await {
                            error!(error = %e, "Heartbeat failed");
                        }
                    }
                }
            }
        })
    }
}
