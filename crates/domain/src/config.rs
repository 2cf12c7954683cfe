pub mod database;
pub mod errors;
pub mod jobs;
pub mod logging;
pub mod root;
pub mod runtime;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use jobs::{
    CleanupJobConfig, HeartbeatJobConfig, JobsConfig, ReminderJobConfig, ReportJobConfig,
    RestockJobConfig,
};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use runtime::RuntimeConfig;
