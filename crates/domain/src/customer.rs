use crate::errors::DomainError;
use crate::timestamp::days_before;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Default inactivity window: a customer with no order in the last year is inactive.
pub const DEFAULT_INACTIVITY_DAYS: u32 = 365;

/// A CRM customer. Orders reference customers, never the other way round.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: Option<i64>,
    pub name: Arc<str>,
    pub email: Arc<str>,
    pub phone: Option<Arc<str>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Customer {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            id: None,
            name: Arc::from(name),
            email: Arc::from(email),
            phone: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Decides which customers count as inactive at a given instant.
///
/// A customer is inactive when it has no orders at all, or when none of its
/// orders is dated on or after `now - window_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityPolicy {
    pub window_days: u32,
}

impl InactivityPolicy {
    pub fn new(window_days: u32) -> Self {
        Self { window_days }
    }

    pub fn cutoff(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, DomainError> {
        days_before(now, self.window_days)
    }

    /// Apply the policy to the order dates of a single customer.
    pub fn is_inactive<I>(&self, order_dates: I, now: DateTime<Utc>) -> Result<bool, DomainError>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        let cutoff = self.cutoff(now)?;
        let mut dates = order_dates.into_iter().peekable();
        if dates.peek().is_none() {
            return Ok(true);
        }
        Ok(dates.all(|date| date < cutoff))
    }
}

impl Default for InactivityPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_INACTIVITY_DAYS)
    }
}
