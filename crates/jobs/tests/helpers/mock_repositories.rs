#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use crm_jobs_application::ports::{
    CustomerRepository, JobLog, OrderRepository, OrderTotals, ProductRepository, StoreHealthPort,
};
use crm_jobs_domain::{DomainError, PendingOrder, RestockPolicy, RestockedProduct};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Customers keyed by id, each with the dates of its orders.
#[derive(Clone)]
pub struct MockCustomerRepository {
    customers: Arc<RwLock<HashMap<i64, Vec<DateTime<Utc>>>>>,
}

impl MockCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn add_customer(&self, id: i64, order_days_ago: &[i64]) {
        let dates = order_days_ago
            .iter()
            .map(|days| Utc::now() - Duration::days(*days))
            .collect();
        self.customers.write().await.insert(id, dates);
    }

    pub async fn count_now(&self) -> usize {
        self.customers.read().await.len()
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepository {
    async fn find_without_orders(&self) -> Result<Vec<i64>, DomainError> {
        Ok(self
            .customers
            .read()
            .await
            .iter()
            .filter(|(_, dates)| dates.is_empty())
            .map(|(id, _)| *id)
            .collect())
    }

    async fn find_without_orders_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<i64>, DomainError> {
        Ok(self
            .customers
            .read()
            .await
            .iter()
            .filter(|(_, dates)| !dates.iter().any(|d| *d >= cutoff))
            .map(|(id, _)| *id)
            .collect())
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64, DomainError> {
        let mut customers = self.customers.write().await;
        Ok(ids.iter().filter(|id| customers.remove(id).is_some()).count() as u64)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.customers.read().await.len() as u64)
    }
}

/// Order, product and health ports that have nothing to report.
#[derive(Clone)]
pub struct MockQuietStore;

#[async_trait]
impl OrderRepository for MockQuietStore {
    async fn find_placed_since(
        &self,
        _since: DateTime<Utc>,
    ) -> Result<Vec<PendingOrder>, DomainError> {
        Ok(Vec::new())
    }

    async fn totals(&self) -> Result<OrderTotals, DomainError> {
        Ok(OrderTotals::default())
    }
}

#[async_trait]
impl ProductRepository for MockQuietStore {
    async fn restock_below(
        &self,
        _policy: RestockPolicy,
    ) -> Result<Vec<RestockedProduct>, DomainError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl StoreHealthPort for MockQuietStore {
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[derive(Clone)]
pub struct MockJobLog {
    entries: Arc<RwLock<Vec<String>>>,
    delay: std::time::Duration,
}

impl MockJobLog {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            delay: std::time::Duration::ZERO,
        }
    }

    /// A log whose writes take `delay` to complete.
    pub fn slow(delay: std::time::Duration) -> Self {
        Self {
            delay,
            ..Self::new()
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn entries(&self) -> Vec<String> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl JobLog for MockJobLog {
    async fn append(&self, entry: &str) -> Result<(), DomainError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.entries.write().await.push(entry.to_string());
        Ok(())
    }
}
