pub mod idol;

use axum::http::StatusCode;
use axum::response::Response;

use crate::error::{error_body, NOT_FOUND_MESSAGE};

/// Fallback for unmatched paths: the standard 404 error body.
pub async fn not_found() -> Response {
    error_body(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}
