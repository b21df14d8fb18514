//! Short link entity.

use chrono::{DateTime, Utc};

/// A shortened URL.
///
/// `id` is the slug (custom or generated) and doubles as the registry key.
/// Links are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a link whose short URL is `<base_url>/shortlinks/<id>`.
    pub fn new(id: String, original_url: String, base_url: &str) -> Self {
        let short_url = short_url_for(base_url, &id);
        Self {
            id,
            original_url,
            short_url,
            created_at: Utc::now(),
        }
    }
}

/// Builds the public short URL for a slug.
pub fn short_url_for(base_url: &str, id: &str) -> String {
    format!("{}/shortlinks/{}", base_url.trim_end_matches('/'), id)
}
