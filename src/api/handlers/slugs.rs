//! Handlers for slug validation and suggestions.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::slug::{
    SuggestSlugQuery, SuggestSlugResponse, ValidateSlugRequest, ValidateSlugResponse,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::canonicalize::canonicalize;

/// Validates a proposed custom slug before link creation.
///
/// # Endpoint
///
/// `POST /api/shortlinks/validate`
///
/// # Response
///
/// ```json
/// {
///   "valid": false,
///   "slug": "promo",
///   "reason": "\"promo\" is already taken",
///   "suggestions": ["promo-4821", "my-promo", "prmo"]
/// }
/// ```
///
/// Prohibited slugs are reported without suggestions.
///
/// # Errors
///
/// Returns 400 if `custom_slug` is missing or empty after normalization.
pub async fn validate_slug_handler(
    State(state): State<AppState>,
    Json(payload): Json<ValidateSlugRequest>,
) -> Result<Json<ValidateSlugResponse>, AppError> {
    payload.validate()?;

    let slug = require_slug(&payload.custom_slug)?;
    let result = state.validation_service.validate_canonical(&slug);

    Ok(Json(ValidateSlugResponse::new(slug, result)))
}

/// Reports whether a slug can be claimed and proposes alternatives.
///
/// # Endpoint
///
/// `GET /api/shortlinks/suggest?slug=<desired>`
///
/// # Response
///
/// ```json
/// { "original": "promo", "available": false, "suggestions": ["the-promo"] }
/// ```
///
/// # Errors
///
/// Returns 400 if `slug` is missing or empty after normalization.
pub async fn suggest_slug_handler(
    State(state): State<AppState>,
    Query(query): Query<SuggestSlugQuery>,
) -> Result<Json<SuggestSlugResponse>, AppError> {
    let slug = require_slug(&query.slug)?;
    let availability = state.validation_service.suggest_slug(&slug);

    Ok(Json(availability.into()))
}

fn require_slug(raw: &str) -> Result<String, AppError> {
    let slug = canonicalize(raw);
    if slug.is_empty() {
        return Err(AppError::bad_request(
            "Slug is empty after normalization",
            json!({ "input": raw }),
        ));
    }
    Ok(slug)
}
