/// Failure reported by an [`IdolStore`](crate::IdolStore) operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The backing store cannot serve requests right now.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
