//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short link to its original URL.
///
/// # Endpoint
///
/// `GET /shortlinks/{id}`
///
/// Responds with 301 Moved Permanently; links never change once created.
///
/// # Errors
///
/// Returns 404 Not Found if no link is bound to `id`.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.get_short_link(&id)?;
    debug!("Redirecting {} -> {}", id, link.original_url);

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, link.original_url)],
    ))
}
