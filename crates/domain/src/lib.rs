//! CRM Jobs Domain Layer
pub mod config;
pub mod customer;
pub mod errors;
pub mod job_summary;
pub mod money;
pub mod order;
pub mod product;
pub mod timestamp;

pub use config::{CliOverrides, Config, ConfigError};
pub use customer::{Customer, InactivityPolicy};
pub use errors::DomainError;
pub use job_summary::{
    CleanupSummary, CrmReport, DatabaseHealth, Heartbeat, LoggedRun, ReminderSummary,
    RestockSummary,
};
pub use money::Cents;
pub use order::{Order, PendingOrder};
pub use product::{Product, RestockPolicy, RestockedProduct};
