use crate::money::Cents;
use std::sync::Arc;

pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;
pub const DEFAULT_RESTOCK_INCREMENT: i64 = 10;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Option<i64>,
    pub name: Arc<str>,
    pub price: Cents,
    pub stock: i64,
}

impl Product {
    pub fn new(name: &str, price: Cents, stock: i64) -> Self {
        Self {
            id: None,
            name: Arc::from(name),
            price,
            stock,
        }
    }

    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.stock < threshold
    }
}

/// Products below `threshold` are topped up by `increment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestockPolicy {
    pub threshold: i64,
    pub increment: i64,
}

impl Default for RestockPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            increment: DEFAULT_RESTOCK_INCREMENT,
        }
    }
}

/// Stock level of a product after a restock pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockedProduct {
    pub id: i64,
    pub name: Arc<str>,
    pub new_stock: i64,
}
