//! Slug validation and availability service.

use std::sync::{Arc, Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::application::services::SuggestionEngine;
use crate::domain::content_filter::ContentChecker;
use crate::domain::entities::{SlugAvailability, ValidationResult};
use crate::domain::repositories::LinkRegistry;
use crate::utils::canonicalize::canonicalize;

/// Classifies candidate slugs and proposes alternatives for taken ones.
///
/// Prohibited content is checked before availability: a slug that is both
/// prohibited and taken is reported as prohibited and gets no suggestions.
///
/// The random source is seeded once when the service is built, not per call.
pub struct ValidationService<L: LinkRegistry, C: ContentChecker> {
    registry: Arc<L>,
    filter: Arc<C>,
    engine: SuggestionEngine,
    rng: Mutex<StdRng>,
}

impl<L: LinkRegistry, C: ContentChecker> ValidationService<L, C> {
    /// Creates a service with an OS-seeded random source.
    pub fn new(registry: Arc<L>, filter: Arc<C>) -> Self {
        Self::with_rng(registry, filter, StdRng::from_os_rng())
    }

    /// Creates a service with the given random source.
    pub fn with_rng(registry: Arc<L>, filter: Arc<C>, rng: StdRng) -> Self {
        Self {
            registry,
            filter,
            engine: SuggestionEngine::new(),
            rng: Mutex::new(rng),
        }
    }

    /// Canonicalizes `raw_input` and validates the result.
    pub fn validate_slug(&self, raw_input: &str) -> ValidationResult {
        self.validate_canonical(&canonicalize(raw_input))
    }

    /// Validates an already canonical slug.
    pub fn validate_canonical(&self, slug: &str) -> ValidationResult {
        if self.is_prohibited(slug) {
            debug!("Slug \"{}\" rejected: prohibited content", slug);
            return ValidationResult::prohibited(slug);
        }

        if self.registry.exists(slug) {
            debug!("Slug \"{}\" rejected: already taken", slug);
            return ValidationResult::taken(slug, self.suggestions_for(slug));
        }

        ValidationResult::Valid
    }

    /// Reports whether the canonical form of `desired` can be claimed.
    ///
    /// Suggestions are generated only when it cannot. For a prohibited slug
    /// the list stays empty.
    pub fn suggest_slug(&self, desired: &str) -> SlugAvailability {
        let slug = canonicalize(desired);

        let prohibited = self.is_prohibited(&slug);
        let available = !prohibited && !self.registry.exists(&slug);

        let suggestions = if available || prohibited {
            Vec::new()
        } else {
            self.suggestions_for(&slug)
        };

        SlugAvailability {
            original: slug,
            available,
            suggestions,
        }
    }

    pub fn is_prohibited(&self, slug: &str) -> bool {
        self.filter.contains(slug)
    }

    /// Generates alternatives for `slug` using the shared random source.
    pub fn suggestions_for(&self, slug: &str) -> Vec<String> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.engine
            .generate(slug, self.registry.as_ref(), self.filter.as_ref(), &mut *rng)
    }
}
