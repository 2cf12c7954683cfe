pub mod crm_report;
pub mod heartbeat;
pub mod inactive_customer_cleanup;
pub mod low_stock_restock;
pub mod order_reminder;
pub mod runner;

pub use crm_report::CrmReportJob;
pub use heartbeat::HeartbeatJob;
pub use inactive_customer_cleanup::InactiveCustomerCleanupJob;
pub use low_stock_restock::LowStockRestockJob;
pub use order_reminder::OrderReminderJob;
pub use runner::{JobRunner, RunningJobs};
