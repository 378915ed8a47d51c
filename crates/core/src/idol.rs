//! Idol attribute rules: creation defaults and partial-update merging.
//!
//! Both rules share one notion of a "provided" value: a text field counts as
//! provided when it is present and non-empty, `age` when it is present and
//! strictly positive. Anything else is treated as absent, so a field can never
//! be cleared to its zero value through an update.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in error reporting.
pub const ENTITY: &str = "Idol";

/// Age assigned when a create payload omits it or sends a non-positive value.
pub const DEFAULT_AGE: i64 = 17;

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Partial idol payload accepted by both create and update.
///
/// Keys outside this set (`id`, `created_at`, ...) are ignored during
/// deserialization, and JSON `null` is the same as an omitted key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IdolInput {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub profile: Option<String>,
}

// ---------------------------------------------------------------------------
// Field set
// ---------------------------------------------------------------------------

/// The client-controlled attributes of an idol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdolFields {
    pub name: String,
    pub age: i64,
    pub profile: String,
}

impl IdolFields {
    /// Build the fields for a new idol, filling unset values with defaults.
    pub fn from_input(input: &IdolInput) -> Self {
        Self {
            name: provided_text(&input.name).unwrap_or_default().to_string(),
            age: provided_age(input.age).unwrap_or(DEFAULT_AGE),
            profile: provided_text(&input.profile)
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Apply a partial update on top of these fields.
    ///
    /// Provided values replace the current ones; everything else is kept.
    pub fn merge(&self, patch: &IdolInput) -> Self {
        Self {
            name: provided_text(&patch.name)
                .map(str::to_string)
                .unwrap_or_else(|| self.name.clone()),
            age: provided_age(patch.age).unwrap_or(self.age),
            profile: provided_text(&patch.profile)
                .map(str::to_string)
                .unwrap_or_else(|| self.profile.clone()),
        }
    }
}

/// Parse an idol id taken from a URL path segment.
///
/// A segment that is not an integer cannot name any record, so it is reported
/// as not found rather than as a malformed request.
pub fn parse_idol_id(raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>().map_err(|_| CoreError::NotFound {
        entity: ENTITY,
        id: raw.to_string(),
    })
}

fn provided_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn provided_age(value: Option<i64>) -> Option<i64> {
    value.filter(|age| *age > 0)
}
