//! Idol entity model.

use idol_core::idol::IdolFields;
use idol_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An idol row from the `idols` table.
///
/// `deleted_at` is never serialized; rows with it set are filtered out by
/// every read path.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Idol {
    pub id: DbId,
    pub name: String,
    pub age: i64,
    pub profile: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(skip_serializing)]
    pub deleted_at: Option<Timestamp>,
}

impl Idol {
    /// The client-controlled attributes of this row.
    pub fn fields(&self) -> IdolFields {
        IdolFields {
            name: self.name.clone(),
            age: self.age,
            profile: self.profile.clone(),
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
