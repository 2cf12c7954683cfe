use crm_jobs_application::use_cases::GenerateCrmReportUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub struct CrmReportJob {
    report: Arc<GenerateCrmReportUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CrmReportJob {
    pub fn new(report: Arc<GenerateCrmReportUseCase>) -> Self {
        Self {
            report,
            interval_secs: 7 * 86_400,
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
        info!(interval_secs = self.interval_secs, "Starting CRM report job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CrmReportJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = self.report.execute().await {
                            error!(error = %e, "CRM report failed");
                        }
                    }
                }
            }
        })
    }
}
