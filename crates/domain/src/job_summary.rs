//! Outcomes of the housekeeping jobs and the text they append to job logs.
//!
//! Every `log_entry` returns the complete text for one run, newline
//! terminated, so a job log receives exactly one write per run.

use crate::money::Cents;
use crate::order::PendingOrder;
use crate::product::RestockedProduct;
use crate::timestamp::{HEARTBEAT_TIMESTAMP_FORMAT, LOG_TIMESTAMP_FORMAT};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::{Display, Write};

/// Longest database error text kept in a heartbeat entry.
const HEARTBEAT_ERROR_MAX_CHARS: usize = 30;

fn stamp<Tz>(at: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(format).to_string()
}

/// A job outcome together with the exact text appended to its log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedRun<T> {
    pub outcome: T,
    pub entry: String,
}

impl<T> LoggedRun<T> {
    /// The logged entry without its trailing newline.
    pub fn line(&self) -> &str {
        self.entry.trim_end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupSummary {
    pub cutoff: DateTime<Utc>,
    /// Customers found inactive at the start of the run, ascending ids.
    pub inactive_ids: Vec<i64>,
    /// Rows actually removed; zero on a dry run.
    pub deleted: u64,
    pub dry_run: bool,
}

impl CleanupSummary {
    pub fn log_entry<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        format!(
            "{} - Deleted {} inactive customers\n",
            stamp(at, LOG_TIMESTAMP_FORMAT),
            self.deleted
        )
    }

    pub fn console_summary(&self) -> String {
        if self.dry_run {
            format!(
                "Dry run: {} inactive customers would be deleted (no orders since {})",
                self.inactive_ids.len(),
                self.cutoff.format(LOG_TIMESTAMP_FORMAT)
            )
        } else {
            format!(
                "Deleted {} inactive customers (no orders since {})",
                self.deleted,
                self.cutoff.format(LOG_TIMESTAMP_FORMAT)
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderSummary {
    pub window_days: u32,
    pub orders: Vec<PendingOrder>,
}

impl ReminderSummary {
    pub fn log_entry<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let ts = stamp(at, LOG_TIMESTAMP_FORMAT);
        if self.orders.is_empty() {
            return format!(
                "{} - No pending orders found in the last {} days\n",
                ts, self.window_days
            );
        }

        let mut entry = format!("{} - Processing {} pending orders:\n", ts, self.orders.len());
        for order in &self.orders {
            // Writing into a String cannot fail.
            let _ = writeln!(
                entry,
                "{} - Order ID: {}, Customer Email: {}, Customer Name: {}, Order Date: {}",
                ts,
                order.order_id,
                order.customer_email,
                order.customer_name,
                order.order_date.format(LOG_TIMESTAMP_FORMAT)
            );
        }
        entry
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockSummary {
    pub threshold: i64,
    pub increment: i64,
    pub products: Vec<RestockedProduct>,
}

impl RestockSummary {
    pub fn log_entry<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut entry = format!(
            "{} - Low stock update: {} products restocked\n",
            stamp(at, LOG_TIMESTAMP_FORMAT),
            self.products.len()
        );
        if self.products.is_empty() {
            entry.push_str("  No products required restocking.\n");
        }
        for product in &self.products {
            let _ = writeln!(
                entry,
                "  ID: {} | Name: {} | New Stock: {}",
                product.id, product.name, product.new_stock
            );
        }
        entry
    }

    pub fn console_summary(&self) -> String {
        format!(
            "Low stock update completed: {} products updated",
            self.products.len()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrmReport {
    pub customers: u64,
    pub orders: u64,
    pub revenue: Cents,
}

impl CrmReport {
    pub fn log_entry<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        format!(
            "{} - Report: {} customers, {} orders, {} revenue.\n",
            stamp(at, LOG_TIMESTAMP_FORMAT),
            self.customers,
            self.orders,
            self.revenue
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseHealth {
    Ok,
    Unreachable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heartbeat {
    pub database: DatabaseHealth,
}

impl Heartbeat {
    pub fn status_suffix(&self) -> String {
        match &self.database {
            DatabaseHealth::Ok => " (Database: OK)".to_string(),
            DatabaseHealth::Unreachable(reason) => {
                let short: String = reason.chars().take(HEARTBEAT_ERROR_MAX_CHARS).collect();
                format!(" (Database: {short})")
            }
        }
    }

    pub fn log_entry<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        format!(
            "{} CRM is alive{}\n",
            stamp(at, HEARTBEAT_TIMESTAMP_FORMAT),
            self.status_suffix()
        )
    }
}
