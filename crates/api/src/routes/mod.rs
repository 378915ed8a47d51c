pub mod health;
pub mod idol;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /idols                                           list, create
/// /idols/{id}                                      get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(idol::router())
}
