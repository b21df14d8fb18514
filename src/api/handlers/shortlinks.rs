//! Handlers for short link creation and retrieval.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shortlink::{CreateShortLinkRequest, ShortLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shortlinks`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com", "custom_slug": "My Promo" }
/// ```
///
/// # Errors
///
/// - 400 if the URL is invalid, or the custom slug is empty after
///   normalization or contains prohibited content
/// - 409 if the custom slug is taken; `error.details.suggestions` lists
///   alternatives
pub async fn create_short_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateShortLinkRequest>,
) -> Result<(StatusCode, Json<ShortLinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(&payload.original_url, payload.custom_slug.as_deref())?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Returns a short link by its slug.
///
/// # Endpoint
///
/// `GET /api/shortlinks/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no link is bound to `id`.
pub async fn get_short_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortLinkResponse>, AppError> {
    let link = state.link_service.get_short_link(&id)?;
    Ok(Json(link.into()))
}

/// Lists all short links in no particular order.
///
/// # Endpoint
///
/// `GET /api/shortlinks`
pub async fn list_short_links_handler(
    State(state): State<AppState>,
) -> Json<Vec<ShortLinkResponse>> {
    Json(
        state
            .link_service
            .list_short_links()
            .into_iter()
            .map(ShortLinkResponse::from)
            .collect(),
    )
}
