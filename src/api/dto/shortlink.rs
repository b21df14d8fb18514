//! DTOs for short link creation and retrieval.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortLinkRequest {
    /// The URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional custom slug, canonicalized before use.
    pub custom_slug: Option<String>,
}

/// A short link as returned by the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortLinkResponse {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for ShortLinkResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_url: link.short_url,
            created_at: link.created_at,
        }
    }
}
