use async_trait::async_trait;
use crm_jobs_application::ports::ProductRepository;
use crm_jobs_domain::{DomainError, RestockPolicy, RestockedProduct};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    #[instrument(skip(self))]
    async fn restock_below(
        &self,
        policy: RestockPolicy,
    ) -> Result<Vec<RestockedProduct>, DomainError> {
        // Single statement, so the whole batch lands or none of it does.
        let rows = sqlx::query_as::<_, (i64, String, i64)>(
            "UPDATE products SET
                 stock = stock + ?,
                 updated_at = CURRENT_TIMESTAMP
             WHERE stock < ?
             RETURNING id, name, stock",
        )
        .bind(policy.increment)
        .bind(policy.threshold)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to restock products");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut restocked: Vec<RestockedProduct> = rows
            .into_iter()
            .map(|(id, name, stock)| RestockedProduct {
                id,
                name: Arc::from(name.as_str()),
                new_stock: stock,
            })
            .collect();
        restocked.sort_by_key(|p| p.id);
        Ok(restocked)
    }
}
