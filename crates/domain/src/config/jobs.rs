use crate::customer::DEFAULT_INACTIVITY_DAYS;
use crate::order::DEFAULT_REMINDER_WINDOW_DAYS;
use crate::product::{DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_RESTOCK_INCREMENT};
use serde::{Deserialize, Serialize};

const DAY_SECS: u64 = 86_400;
const WEEK_SECS: u64 = 7 * DAY_SECS;

/// Per-job settings. `interval_secs` only matters in scheduler mode; one-shot
/// commands always run the job exactly once.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JobsConfig {
    #[serde(default)]
    pub cleanup: CleanupJobConfig,

    #[serde(default)]
    pub reminders: ReminderJobConfig,

    #[serde(default)]
    pub restock: RestockJobConfig,

    #[serde(default)]
    pub report: ReportJobConfig,

    #[serde(default)]
    pub heartbeat: HeartbeatJobConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleanupJobConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_weekly")]
    pub interval_secs: u64,

    #[serde(default = "default_cleanup_log")]
    pub log_path: String,

    /// Customers with no order in this many days are deleted.
    #[serde(default = "default_inactivity_days")]
    pub inactivity_days: u32,
}

impl Default for CleanupJobConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: default_weekly(),
            log_path: default_cleanup_log(),
            inactivity_days: default_inactivity_days(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReminderJobConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_daily")]
    pub interval_secs: u64,

    #[serde(default = "default_reminder_log")]
    pub log_path: String,

    #[serde(default = "default_reminder_window_days")]
    pub window_days: u32,
}

impl Default for ReminderJobConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: default_daily(),
            log_path: default_reminder_log(),
            window_days: default_reminder_window_days(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RestockJobConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_twice_daily")]
    pub interval_secs: u64,

    #[serde(default = "default_restock_log")]
    pub log_path: String,

    #[serde(default = "default_low_stock_threshold")]
    pub threshold: i64,

    #[serde(default = "default_restock_increment")]
    pub increment: i64,
}

impl Default for RestockJobConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: default_twice_daily(),
            log_path: default_restock_log(),
            threshold: default_low_stock_threshold(),
            increment: default_restock_increment(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportJobConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_weekly")]
    pub interval_secs: u64,

    #[serde(default = "default_report_log")]
    pub log_path: String,
}

impl Default for ReportJobConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: default_weekly(),
            log_path: default_report_log(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeartbeatJobConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_heartbeat_interval")]
    pub interval_secs: u64,

    #[serde(default = "default_heartbeat_log")]
    pub log_path: String,
}

impl Default for HeartbeatJobConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: default_heartbeat_interval(),
            log_path: default_heartbeat_log(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_weekly() -> u64 {
    WEEK_SECS
}

fn default_daily() -> u64 {
    DAY_SECS
}

fn default_twice_daily() -> u64 {
    DAY_SECS / 2
}

fn default_heartbeat_interval() -> u64 {
    300
}

fn default_inactivity_days() -> u32 {
    DEFAULT_INACTIVITY_DAYS
}

fn default_reminder_window_days() -> u32 {
    DEFAULT_REMINDER_WINDOW_DAYS
}

fn default_low_stock_threshold() -> i64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

fn default_restock_increment() -> i64 {
    DEFAULT_RESTOCK_INCREMENT
}

fn default_cleanup_log() -> String {
    "/tmp/customer_cleanup_log.txt".to_string()
}

fn default_reminder_log() -> String {
    "/tmp/order_reminders_log.txt".to_string()
}

fn default_restock_log() -> String {
    "/tmp/low_stock_updates_log.txt".to_string()
}

fn default_report_log() -> String {
    "/tmp/crm_report_log.txt".to_string()
}

fn default_heartbeat_log() -> String {
    "/tmp/crm_heartbeat_log.txt".to_string()
}
