use async_trait::async_trait;
use idol_core::idol::IdolFields;
use idol_core::types::DbId;

use crate::error::StoreError;
use crate::models::idol::Idol;
use crate::repositories::IdolRepo;
use crate::store::IdolStore;
use crate::DbPool;

/// [`IdolStore`] backed by the `idols` table.
#[derive(Debug, Clone)]
pub struct PgIdolStore {
    pool: DbPool,
}

impl PgIdolStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdolStore for PgIdolStore {
    async fn migrate(&self) -> Result<(), StoreError> {
        crate::run_migrations(&self.pool).await?;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Idol>, StoreError> {
        Ok(IdolRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Idol>, StoreError> {
        Ok(IdolRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert(&self, fields: &IdolFields) -> Result<Idol, StoreError> {
        Ok(IdolRepo::create(&self.pool, fields).await?)
    }

    async fn update(&self, id: DbId, fields: &IdolFields) -> Result<Option<Idol>, StoreError> {
        Ok(IdolRepo::update(&self.pool, id, fields).await?)
    }

    async fn soft_delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(IdolRepo::soft_delete(&self.pool, id).await?)
    }
}
