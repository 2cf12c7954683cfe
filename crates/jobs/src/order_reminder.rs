use crm_jobs_application::use_cases::SendOrderRemindersUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub struct OrderReminderJob {
    reminders: Arc<SendOrderRemindersUseCase>,
    window_days: u32,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl OrderReminderJob {
    pub fn new(reminders: Arc<SendOrderRemindersUseCase>, window_days: u32) -> Self {
        Self {
            reminders,
            window_days,
            interval_secs: 86_400,
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
            window_days = self.window_days,
            interval_secs = self.interval_secs,
            "Starting order reminder job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("OrderReminderJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.reminders.execute(self.window_days).await {
                            Ok(summary) => {
                                info!(pending = summary.orders.len(), "Order reminders completed");
                            }
                            Err(e) => {
                                error!(error = %e, "Order reminders failed");
                            }
                        }
                    }
                }
            }
        })
    }
}
