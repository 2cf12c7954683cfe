use crm_jobs_domain::config::JobsConfig;
use crm_jobs_infrastructure::job_log::FileJobLog;
use crm_jobs_infrastructure::repositories::{
    SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository, SqliteStoreHealth,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct JobLogs {
    pub cleanup: Arc<FileJobLog>,
    pub reminders: Arc<FileJobLog>,
    pub restock: Arc<FileJobLog>,
    pub report: Arc<FileJobLog>,
    pub heartbeat: Arc<FileJobLog>,
}

pub struct Repositories {
    pub customer: Arc<SqliteCustomerRepository>,
    pub order: Arc<SqliteOrderRepository>,
    pub product: Arc<SqliteProductRepository>,
    pub health: Arc<SqliteStoreHealth>,
    pub logs: JobLogs,
}

impl Repositories {
    pub fn new(pool: SqlitePool, jobs: &JobsConfig) -> Self {
        Self {
            customer: Arc::new(SqliteCustomerRepository::new(pool.clone())),
            order: Arc::new(SqliteOrderRepository::new(pool.clone())),
            product: Arc::new(SqliteProductRepository::new(pool.clone())),
            health: Arc::new(SqliteStoreHealth::new(pool)),
            logs: JobLogs {
                cleanup: Arc::new(FileJobLog::new(&jobs.cleanup.log_path)),
                reminders: Arc::new(FileJobLog::new(&jobs.reminders.log_path)),
                restock: Arc::new(FileJobLog::new(&jobs.restock.log_path)),
                report: Arc::new(FileJobLog::new(&jobs.report.log_path)),
                heartbeat: Arc::new(FileJobLog::new(&jobs.heartbeat.log_path)),
            },
        }
    }
}
