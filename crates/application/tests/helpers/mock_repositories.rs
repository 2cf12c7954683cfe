#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use crm_jobs_application::ports::{
    CustomerRepository, JobLog, OrderRepository, OrderTotals, ProductRepository, StoreHealthPort,
};
use crm_jobs_domain::{
    Cents, Customer, DomainError, Order, PendingOrder, Product, RestockPolicy, RestockedProduct,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn fixed_now() -> DateTime<Utc> {
    use chrono::TimeZone;
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

/// In-memory CRM store: customers, orders (cascade-deleted with their
/// customer) and products.
#[derive(Clone)]
pub struct MockCrmStore {
    customers: Arc<RwLock<Vec<Customer>>>,
    orders: Arc<RwLock<Vec<Order>>>,
    products: Arc<RwLock<Vec<Product>>>,
    should_fail: Arc<RwLock<bool>>,
    delete_calls: Arc<AtomicU64>,
}

impl MockCrmStore {
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(Vec::new())),
            orders: Arc::new(RwLock::new(Vec::new())),
            products: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
            delete_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn add_customer(&self, id: i64, name: &str) {
        let mut customer = Customer::new(name, &format!("{}@example.com", name.to_lowercase()));
        customer.id = Some(id);
        self.customers.write().await.push(customer);
    }

    pub async fn add_order(&self, id: i64, customer_id: i64, order_date: DateTime<Utc>) {
        self.add_order_with_total(id, customer_id, order_date, Cents(0))
            .await;
    }

    pub async fn add_order_with_total(
        &self,
        id: i64,
        customer_id: i64,
        order_date: DateTime<Utc>,
        total: Cents,
    ) {
        let mut order = Order::new(customer_id, order_date).with_total(total);
        order.id = Some(id);
        self.orders.write().await.push(order);
    }

    pub async fn add_product(&self, id: i64, name: &str, stock: i64) {
        let mut product = Product::new(name, Cents(999), stock);
        product.id = Some(id);
        self.products.write().await.push(product);
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn customer_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self
            .customers
            .read()
            .await
            .iter()
            .filter_map(|c| c.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn stock_of(&self, id: i64) -> Option<i64> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == Some(id))
            .map(|p| p.stock)
    }

    pub fn delete_calls(&self) -> u64 {
        self.delete_calls.load(Ordering::Relaxed)
    }

    async fn fail_if_requested(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for MockCrmStore {
    async fn find_without_orders(&self) -> Result<Vec<i64>, DomainError> {
        self.fail_if_requested().await?;
        let orders = self.orders.read().await;
        Ok(self
            .customers
            .read()
            .await
            .iter()
            .filter_map(|c| c.id)
            .filter(|id| !orders.iter().any(|o| o.customer_id == *id))
            .collect())
    }

    async fn find_without_orders_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<i64>, DomainError> {
        self.fail_if_requested().await?;
        let orders = self.orders.read().await;
        Ok(self
            .customers
            .read()
            .await
            .iter()
            .filter_map(|c| c.id)
            .filter(|id| {
                !orders
                    .iter()
                    .any(|o| o.customer_id == *id && o.order_date >= cutoff)
            })
            .collect())
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64, DomainError> {
        self.fail_if_requested().await?;
        self.delete_calls.fetch_add(1, Ordering::Relaxed);
        let mut customers = self.customers.write().await;
        let before = customers.len();
        customers.retain(|c| c.id.map_or(true, |id| !ids.contains(&id)));
        self.orders
            .write()
            .await
            .retain(|o| !ids.contains(&o.customer_id));
        Ok((before - customers.len()) as u64)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.fail_if_requested().await?;
        Ok(self.customers.read().await.len() as u64)
    }
}

#[async_trait]
impl OrderRepository for MockCrmStore {
    async fn find_placed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<PendingOrder>, DomainError> {
        self.fail_if_requested().await?;
        let customers = self.customers.read().await;
        let mut pending: Vec<PendingOrder> = self
            .orders
            .read()
            .await
            .iter()
            .filter(|o| o.order_date >= since)
            .filter_map(|o| {
                let customer = customers.iter().find(|c| c.id == Some(o.customer_id))?;
                Some(PendingOrder {
                    order_id: o.id?,
                    order_date: o.order_date,
                    customer_name: customer.name.clone(),
                    customer_email: customer.email.clone(),
                })
            })
            .collect();
        pending.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(pending)
    }

    async fn totals(&self) -> Result<OrderTotals, DomainError> {
        self.fail_if_requested().await?;
        let orders = self.orders.read().await;
        Ok(OrderTotals {
            count: orders.len() as u64,
            revenue: orders.iter().map(|o| o.total_amount).sum(),
        })
    }
}

#[async_trait]
impl ProductRepository for MockCrmStore {
    async fn restock_below(
        &self,
        policy: RestockPolicy,
    ) -> Result<Vec<RestockedProduct>, DomainError> {
        self.fail_if_requested().await?;
        let mut restocked = Vec::new();
        for product in self.products.write().await.iter_mut() {
            if product.is_low_stock(policy.threshold) {
                product.stock += policy.increment;
                restocked.push(RestockedProduct {
                    id: product.id.unwrap_or_default(),
                    name: product.name.clone(),
                    new_stock: product.stock,
                });
            }
        }
        Ok(restocked)
    }
}

#[async_trait]
impl StoreHealthPort for MockCrmStore {
    async fn ping(&self) -> Result<(), DomainError> {
        self.fail_if_requested().await
    }
}

/// Job log capturing every appended entry.
#[derive(Clone)]
pub struct MockJobLog {
    entries: Arc<RwLock<Vec<String>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockJobLog {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn entries(&self) -> Vec<String> {
        self.entries.read().await.clone()
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl JobLog for MockJobLog {
    async fn append(&self, entry: &str) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::IoError("permission denied".to_string()));
        }
        self.entries.write().await.push(entry.to_string());
        Ok(())
    }
}
