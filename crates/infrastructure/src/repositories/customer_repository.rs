use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_jobs_application::ports::CustomerRepository;
use crm_jobs_domain::{timestamp, DomainError};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, error, instrument};

/// Stay well below SQLite's bound-parameter limit per statement.
const DELETE_CHUNK_SIZE: usize = 500;

pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    #[instrument(skip(self))]
    async fn find_without_orders(&self) -> Result<Vec<i64>, DomainError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT c.id FROM customers c
             WHERE NOT EXISTS (SELECT 1 FROM orders o WHERE o.customer_id = c.id)
             ORDER BY c.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query customers without orders");
            DomainError::DatabaseError(e.to_string())
        })
    }

    #[instrument(skip(self))]
    async fn find_without_orders_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<i64>, DomainError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT c.id FROM customers c
             WHERE NOT EXISTS (
                 SELECT 1 FROM orders o
                 WHERE o.customer_id = c.id AND datetime(o.order_date) >= datetime(?)
             )
             ORDER BY c.id",
        )
        .bind(timestamp::to_db(cutoff))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query customers without recent orders");
            DomainError::DatabaseError(e.to_string())
        })
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin delete transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut deleted = 0;
        for chunk in ids.chunks(DELETE_CHUNK_SIZE) {
            let mut builder: QueryBuilder<Sqlite> =
                QueryBuilder::new("DELETE FROM customers WHERE id IN (");
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            let result = builder.build().execute(&mut *tx).await.map_err(|e| {
                error!(error = %e, "Failed to delete customers");
                DomainError::DatabaseError(e.to_string())
            })?;
            deleted += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit customer deletion");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(deleted, "Customers deleted");
        Ok(deleted)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, DomainError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count customers");
                DomainError::DatabaseError(e.to_string())
            })?;
        Ok(total as u64)
    }
}
