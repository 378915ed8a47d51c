use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use idol_core::idol::IdolFields;
use idol_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::idol::Idol;
use crate::store::IdolStore;

/// In-process [`IdolStore`] holding rows in a `BTreeMap`.
///
/// Ids are assigned from a counter starting at 1, mirroring a `BIGSERIAL`
/// column. Soft-deleted rows stay in the map with `deleted_at` set.
#[derive(Debug, Default)]
pub struct MemoryIdolStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    rows: BTreeMap<DbId, Idol>,
}

impl MemoryIdolStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows held, including soft-deleted ones.
    pub async fn row_count(&self) -> usize {
        self.inner.read().await.rows.len()
    }
}

#[async_trait]
impl IdolStore for MemoryIdolStore {
    async fn migrate(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Idol>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .filter(|idol| !idol.is_deleted())
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Idol>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id).filter(|idol| !idol.is_deleted()).cloned())
    }

    async fn insert(&self, fields: &IdolFields) -> Result<Idol, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let now = Utc::now();
        let idol = Idol {
            id: inner.last_id,
            name: fields.name.clone(),
            age: fields.age,
            profile: fields.profile.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        inner.rows.insert(idol.id, idol.clone());
        tracing::debug!(idol_id = idol.id, "Inserted idol");
        Ok(idol)
    }

    async fn update(&self, id: DbId, fields: &IdolFields) -> Result<Option<Idol>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(idol) = inner.rows.get_mut(&id).filter(|idol| !idol.is_deleted()) else {
            return Ok(None);
        };
        idol.name = fields.name.clone();
        idol.age = fields.age;
        idol.profile = fields.profile.clone();
        idol.updated_at = Utc::now();
        tracing::debug!(idol_id = id, "Updated idol");
        Ok(Some(idol.clone()))
    }

    async fn soft_delete(&self, id: DbId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(idol) = inner.rows.get_mut(&id).filter(|idol| !idol.is_deleted()) else {
            return Ok(false);
        };
        idol.deleted_at = Some(Utc::now());
        tracing::debug!(idol_id = id, "Soft-deleted idol");
        Ok(true)
    }
}
