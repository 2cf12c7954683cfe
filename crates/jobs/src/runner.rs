use crate::{
    CrmReportJob, HeartbeatJob, InactiveCustomerCleanupJob, LowStockRestockJob, OrderReminderJob,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub trait SpawnableJob: Send + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> JoinHandle<()> {
                self.start()
            }
        }
    };
}

impl_spawnable_job!(InactiveCustomerCleanupJob);
impl_spawnable_job!(OrderReminderJob);
impl_spawnable_job!(LowStockRestockJob);
impl_spawnable_job!(CrmReportJob);
impl_spawnable_job!(HeartbeatJob);

fn spawn_job<J: SpawnableJob>(
    job: Option<J>,
    shutdown: &Option<CancellationToken>,
    handles: &mut Vec<JoinHandle<()>>,
) {
    if let Some(job) = job {
        let job = match shutdown {
            Some(token) => job.with_cancellation(token.clone()),
            None => job,
        };
        handles.push(Arc::new(job).start_job());
    }
}

/// Handles of the jobs a `JobRunner` started.
pub struct RunningJobs {
    handles: Vec<JoinHandle<()>>,
}

impl RunningJobs {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Wait for every job to return. A job only returns once its shutdown
    /// token is cancelled, and a run already in progress finishes first.
    pub async fn join(self) {
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Background job terminated abnormally");
            }
        }
    }
}

pub struct JobRunner {
    cleanup: Option<InactiveCustomerCleanupJob>,
    reminders: Option<OrderReminderJob>,
    restock: Option<LowStockRestockJob>,
    report: Option<CrmReportJob>,
    heartbeat: Option<HeartbeatJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            cleanup: None,
            reminders: None,
            restock: None,
            report: None,
            heartbeat: None,
            shutdown: None,
        }
    }

    pub fn with_cleanup(mut self, job: InactiveCustomerCleanupJob) -> Self {
        self.cleanup = Some(job);
        self
    }

    pub fn with_reminders(mut self, job: OrderReminderJob) -> Self {
        self.reminders = Some(job);
        self
    }

    pub fn with_restock(mut self, job: LowStockRestockJob) -> Self {
        self.restock = Some(job);
        self
    }

    pub fn with_report(mut self, job: CrmReportJob) -> Self {
        self.report = Some(job);
        self
    }

    pub fn with_heartbeat(mut self, job: HeartbeatJob) -> Self {
        self.heartbeat = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    /// Spawn every configured job.
    pub async fn start(self) -> RunningJobs {
        info!("Starting background job runner");

        let mut handles = Vec::new();
        spawn_job(self.cleanup, &self.shutdown, &mut handles);
        spawn_job(self.reminders, &self.shutdown, &mut handles);
        spawn_job(self.restock, &self.shutdown, &mut handles);
        spawn_job(self.report, &self.shutdown, &mut handles);
        spawn_job(self.heartbeat, &self.shutdown, &mut handles);

        info!(started = handles.len(), "Background jobs started");
        RunningJobs { handles }
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
