use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_application::ports::{OrderRepository, OrderTotals};
use crm_jobs_domain::{timestamp, Cents, DomainError, PendingOrder};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type PendingOrderRow = (i64, String, String, String);

pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_pending(row: PendingOrderRow) -> Result<PendingOrder, DomainError> {
        let (order_id, order_date, customer_name, customer_email) = row;
        Ok(PendingOrder {
            order_id,
            order_date: timestamp::from_db(&order_date)?,
            customer_name: Arc::from(customer_name.as_str()),
            customer_email: Arc::from(customer_email.as_str()),
        })
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    #[instrument(skip(self))]
    async fn find_placed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<PendingOrder>, DomainError> {
        let rows = sqlx::query_as::<_, PendingOrderRow>(
            "SELECT o.id, datetime(o.order_date) as order_date, c.name, c.email
             FROM orders o
             JOIN customers c ON c.id = o.customer_id
             WHERE datetime(o.order_date) >= datetime(?)
             ORDER BY datetime(o.order_date) DESC, o.id DESC",
        )
        .bind(timestamp::to_db(since))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch recent orders");
            DomainError::DatabaseError(e.to_string())
        })?;

        rows.into_iter().map(Self::row_to_pending).collect()
    }

    #[instrument(skip(self))]
    async fn totals(&self) -> Result<OrderTotals, DomainError> {
        let (count, revenue) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), COALESCE(SUM(total_amount_cents), 0) FROM orders",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to aggregate orders");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(OrderTotals {
            count: count as u64,
            revenue: Cents(revenue),
        })
    }
}
