//! Link creation and retrieval service.

use std::sync::{Arc, Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use tracing::{info, warn};

use crate::application::services::ValidationService;
use crate::domain::content_filter::ContentChecker;
use crate::domain::entities::{ShortLink, ValidationResult};
use crate::domain::repositories::{InsertOutcome, LinkRegistry};
use crate::error::AppError;
use crate::utils::canonicalize::canonicalize;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;

/// Attempts at finding a free random code before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for creating and retrieving short links.
///
/// Custom slugs go through the same canonicalization and content rules as
/// the validation endpoints. The final "is it free?" decision is made by a
/// single atomic [`LinkRegistry::insert`], never by a separate lookup.
pub struct LinkService<L: LinkRegistry, C: ContentChecker> {
    registry: Arc<L>,
    validation: Arc<ValidationService<L, C>>,
    base_url: String,
    code_length: usize,
    rng: Mutex<StdRng>,
}

impl<L: LinkRegistry, C: ContentChecker> LinkService<L, C> {
    /// Creates a new link service.
    pub fn new(
        registry: Arc<L>,
        validation: Arc<ValidationService<L, C>>,
        base_url: impl Into<String>,
        code_length: usize,
    ) -> Self {
        Self::with_rng(
            registry,
            validation,
            base_url,
            code_length,
            StdRng::from_os_rng(),
        )
    }

    /// Creates a link service with the given random source for short codes.
    pub fn with_rng(
        registry: Arc<L>,
        validation: Arc<ValidationService<L, C>>,
        base_url: impl Into<String>,
        code_length: usize,
        rng: StdRng,
    ) -> Self {
        Self {
            registry,
            validation,
            base_url: base_url.into(),
            code_length,
            rng: Mutex::new(rng),
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `original_url` - The URL to shorten
    /// - `custom_slug` - Optional user-proposed slug; canonicalized before use.
    ///   Blank values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - The URL is not an absolute HTTP(S) URL
    /// - The custom slug is empty after canonicalization
    /// - The custom slug contains prohibited content
    ///
    /// Returns [`AppError::Conflict`] if the custom slug is taken. The error
    /// details carry `suggestions`.
    ///
    /// Returns [`AppError::Internal`] if no free random code was found.
    pub fn create_short_link(
        &self,
        original_url: &str,
        custom_slug: Option<&str>,
    ) -> Result<ShortLink, AppError> {
        let original_url = normalize_url(original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        match custom_slug.filter(|s| !s.trim().is_empty()) {
            Some(custom) => self.create_with_custom_slug(original_url, custom),
            None => self.create_with_generated_code(original_url),
        }
    }

    fn create_with_custom_slug(
        &self,
        original_url: String,
        custom: &str,
    ) -> Result<ShortLink, AppError> {
        let slug = canonicalize(custom);
        if slug.is_empty() {
            return Err(AppError::bad_request(
                "Custom slug is empty after normalization",
                json!({ "custom_slug": custom }),
            ));
        }

        if self.validation.is_prohibited(&slug) {
            let result = ValidationResult::prohibited(&slug);
            return Err(AppError::bad_request(
                result.reason().unwrap_or_default(),
                json!({ "slug": slug }),
            ));
        }

        let link = ShortLink::new(slug.clone(), original_url, &self.base_url);
        match self.registry.insert(link.clone()) {
            InsertOutcome::Inserted => {
                info!("Created short link {} -> {}", link.id, link.original_url);
                Ok(link)
            }
            InsertOutcome::AlreadyExists => {
                let result = ValidationResult::taken(&slug, self.validation.suggestions_for(&slug));
                Err(AppError::conflict(
                    result.reason().unwrap_or_default(),
                    json!({ "slug": slug, "suggestions": result.suggestions() }),
                ))
            }
        }
    }

    fn create_with_generated_code(&self, original_url: String) -> Result<ShortLink, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = {
                let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
                generate_code(&mut *rng, self.code_length)
            };

            let link = ShortLink::new(code, original_url.clone(), &self.base_url);
            if self.registry.insert(link.clone()) == InsertOutcome::Inserted {
                info!("Created short link {} -> {}", link.id, link.original_url);
                return Ok(link);
            }
        }

        warn!("Gave up generating a short code after {MAX_CODE_ATTEMPTS} collisions");
        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Retrieves a link by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link is bound to `id`.
    pub fn get_short_link(&self, id: &str) -> Result<ShortLink, AppError> {
        self.registry
            .get(id)
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
    }

    /// Lists all links, in no particular order.
    pub fn list_short_links(&self) -> Vec<ShortLink> {
        self.registry.list()
    }
}
