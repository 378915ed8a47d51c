//! Handlers for the `/idols` resource.
//!
//! Path ids arrive as raw strings and are parsed here so that a non-numeric
//! id answers 404 like any other unknown id. JSON bodies are taken as
//! `Result<Json<_>, JsonRejection>` so parse failures surface as 400 with the
//! standard error body, and so PUT can report a missing idol before looking
//! at its body.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use idol_core::idol::{parse_idol_id, IdolFields, IdolInput, ENTITY};
use idol_db::models::idol::Idol;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /v1/idols
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Idol>>> {
    let idols = state.store.list().await?;
    Ok(Json(idols))
}

/// GET /v1/idols/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Idol>> {
    let idol = find_active(&state, &id).await?;
    Ok(Json(idol))
}

/// POST /v1/idols
///
/// Any `id` in the payload is ignored; the store always assigns one.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<IdolInput>, JsonRejection>,
) -> AppResult<Json<Idol>> {
    let Json(input) = payload?;
    let idol = state.store.insert(&IdolFields::from_input(&input)).await?;
    tracing::info!(idol_id = idol.id, "Created idol");
    Ok(Json(idol))
}

/// PUT /v1/idols/{id}
///
/// Partial update: only non-empty strings and positive ages in the payload
/// replace stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<IdolInput>, JsonRejection>,
) -> AppResult<Json<Idol>> {
    let existing = find_active(&state, &id).await?;
    let Json(patch) = payload?;

    let merged = existing.fields().merge(&patch);
    let idol = state
        .store
        .update(existing.id, &merged)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, existing.id))?;
    tracing::info!(idol_id = idol.id, "Updated idol");
    Ok(Json(idol))
}

/// DELETE /v1/idols/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let existing = find_active(&state, &id).await?;
    if state.store.soft_delete(existing.id).await? {
        tracing::info!(idol_id = existing.id, "Deleted idol");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ENTITY, existing.id))
    }
}

// ── Private helpers ──────────────────────────────────────────────────────

/// Resolve a raw path id to an active idol or a not-found error.
async fn find_active(state: &AppState, raw_id: &str) -> AppResult<Idol> {
    let id = parse_idol_id(raw_id)?;
    state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}
