//! Route definitions for the idol resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::idol;
use crate::state::AppState;

/// Idol routes, mounted under `/v1`.
///
/// ```text
/// GET    /idols         -> list
/// POST   /idols         -> create
/// GET    /idols/{id}    -> get_by_id
/// PUT    /idols/{id}    -> update
/// DELETE /idols/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/idols", get(idol::list).post(idol::create))
        .route(
            "/idols/{id}",
            get(idol::get_by_id)
                .put(idol::update)
                .delete(idol::delete),
        )
}
