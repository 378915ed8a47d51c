//! Repository for the `idols` table.

use idol_core::idol::IdolFields;
use idol_core::types::DbId;
use sqlx::PgPool;

use crate::models::idol::Idol;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, profile, created_at, updated_at, deleted_at";

/// Provides CRUD operations for idols.
pub struct IdolRepo;

impl IdolRepo {
    /// Insert a new idol, returning the created row.
    ///
    /// The id is always generated by the database. `created_at` and
    /// `updated_at` share the transaction timestamp, so they are equal.
    pub async fn create(pool: &PgPool, fields: &IdolFields) -> Result<Idol, sqlx::Error> {
        let query = format!(
            "INSERT INTO idols (name, age, profile, created_at, updated_at)
             VALUES ($1, $2, $3, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        let idol = sqlx::query_as::<_, Idol>(&query)
            .bind(&fields.name)
            .bind(fields.age)
            .bind(&fields.profile)
            .fetch_one(pool)
            .await?;
        tracing::debug!(idol_id = idol.id, "Inserted idol");
        Ok(idol)
    }

    /// Find an idol by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Idol>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM idols WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Idol>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all idols in primary-key order. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Idol>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM idols WHERE deleted_at IS NULL ORDER BY id ASC");
        sqlx::query_as::<_, Idol>(&query).fetch_all(pool).await
    }

    /// Overwrite the client-controlled fields of an idol and refresh
    /// `updated_at`.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &IdolFields,
    ) -> Result<Option<Idol>, sqlx::Error> {
        let query = format!(
            "UPDATE idols SET
                name = $2,
                age = $3,
                profile = $4,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        let idol = sqlx::query_as::<_, Idol>(&query)
            .bind(id)
            .bind(&fields.name)
            .bind(fields.age)
            .bind(&fields.profile)
            .fetch_optional(pool)
            .await?;
        tracing::debug!(idol_id = id, found = idol.is_some(), "Updated idol");
        Ok(idol)
    }

    /// Soft-delete an idol by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE idols SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        let deleted = result.rows_affected() > 0;
        tracing::debug!(idol_id = id, deleted, "Soft-deleted idol");
        Ok(deleted)
    }

    /// Find an idol by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Idol>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM idols WHERE id = $1");
        sqlx::query_as::<_, Idol>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
