use async_trait::async_trait;
use crm_jobs_application::ports::StoreHealthPort;
use crm_jobs_domain::DomainError;
use sqlx::SqlitePool;
use tracing::instrument;

pub struct SqliteStoreHealth {
    pool: SqlitePool,
}

impl SqliteStoreHealth {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealthPort for SqliteStoreHealth {
    #[instrument(skip(self))]
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::DatabaseError(e.to_string()))
    }
}
