use crate::errors::DomainError;
use crate::money::Cents;
use crate::timestamp::days_before;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Orders placed within this many days are candidates for a reminder.
pub const DEFAULT_REMINDER_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Option<i64>,
    pub customer_id: i64,
    pub total_amount: Cents,
    pub order_date: DateTime<Utc>,
}

impl Order {
    pub fn new(customer_id: i64, order_date: DateTime<Utc>) -> Self {
        Self {
            id: None,
            customer_id,
            total_amount: Cents::default(),
            order_date,
        }
    }

    pub fn with_total(mut self, total_amount: Cents) -> Self {
        self.total_amount = total_amount;
        self
    }
}

/// A recent order joined with the customer contact details a reminder needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOrder {
    pub order_id: i64,
    pub order_date: DateTime<Utc>,
    pub customer_name: Arc<str>,
    pub customer_email: Arc<str>,
}

pub fn reminder_window_start(
    now: DateTime<Utc>,
    window_days: u32,
) -> Result<DateTime<Utc>, DomainError> {
    days_before(now, window_days)
}
