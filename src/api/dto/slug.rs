//! DTOs for slug validation and suggestion endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{SlugAvailability, ValidationResult};

/// Request body for `POST /api/shortlinks/validate`.
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateSlugRequest {
    #[validate(length(min = 1, message = "custom_slug is required"))]
    pub custom_slug: String,
}

/// Validation verdict for a canonicalized slug.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateSlugResponse {
    pub valid: bool,
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ValidateSlugResponse {
    pub fn new(slug: String, result: ValidationResult) -> Self {
        match result {
            ValidationResult::Valid => Self {
                valid: true,
                slug,
                reason: None,
                suggestions: Vec::new(),
            },
            ValidationResult::Invalid {
                reason,
                suggestions,
            } => Self {
                valid: false,
                slug,
                reason: Some(reason),
                suggestions,
            },
        }
    }
}

/// Query string for `GET /api/shortlinks/suggest`.
#[derive(Debug, Deserialize)]
pub struct SuggestSlugQuery {
    #[serde(default)]
    pub slug: String,
}

/// Availability of a slug plus alternatives when it is not.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestSlugResponse {
    pub original: String,
    pub available: bool,
    pub suggestions: Vec<String>,
}

impl From<SlugAvailability> for SuggestSlugResponse {
    fn from(availability: SlugAvailability) -> Self {
        Self {
            original: availability.original,
            available: availability.available,
            suggestions: availability.suggestions,
        }
    }
}
