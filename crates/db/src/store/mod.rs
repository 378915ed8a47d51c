//! Record store abstraction.
//!
//! Handlers depend on [`IdolStore`] rather than on a concrete database so the
//! same HTTP layer runs against Postgres in production and against the
//! in-process store in tests.

use async_trait::async_trait;
use idol_core::idol::IdolFields;
use idol_core::types::DbId;

use crate::error::StoreError;
use crate::models::idol::Idol;

pub mod memory;
pub mod postgres;

/// Persistence operations over idol records.
///
/// Every read and write only sees active rows; soft-deleted rows behave as if
/// they did not exist.
#[async_trait]
pub trait IdolStore: Send + Sync {
    /// Bring the backing schema up to date.
    async fn migrate(&self) -> Result<(), StoreError>;

    /// Check that the store can serve requests.
    async fn health_check(&self) -> Result<(), StoreError>;

    /// All active idols in primary-key order.
    async fn list(&self) -> Result<Vec<Idol>, StoreError>;

    /// The active idol with the given id, if any.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Idol>, StoreError>;

    /// Persist a new idol. The store assigns the id and both timestamps.
    async fn insert(&self, fields: &IdolFields) -> Result<Idol, StoreError>;

    /// Save new field values for an active idol and refresh `updated_at`.
    ///
    /// Returns `None` if no active idol has the given id.
    async fn update(&self, id: DbId, fields: &IdolFields) -> Result<Option<Idol>, StoreError>;

    /// Mark an active idol deleted. Returns `false` if none matched.
    async fn soft_delete(&self, id: DbId) -> Result<bool, StoreError>;
}

/// Which [`IdolStore`] implementation to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    Memory,
}

/// Create the configured store.
///
/// For Postgres this opens the pool and verifies connectivity; migrations are
/// left to the caller via [`IdolStore::migrate`].
pub async fn create_store(backend: &StoreBackend) -> Result<Box<dyn IdolStore>, StoreError> {
    match backend {
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = crate::create_pool(database_url, *max_connections).await?;
            tracing::info!(max_connections = *max_connections, "Database connection pool created");
            crate::health_check(&pool).await?;
            tracing::info!("Database health check passed");
            Ok(Box::new(postgres::PgIdolStore::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::info!("Using in-memory idol store");
            Ok(Box::new(memory::MemoryIdolStore::new()))
        }
    }
}
