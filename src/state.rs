//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, ValidationService};
use crate::domain::content_filter::ContentFilter;
use crate::domain::repositories::LinkRegistry;
use crate::infrastructure::persistence::InMemoryLinkRegistry;

pub type AppValidationService = ValidationService<InMemoryLinkRegistry, ContentFilter>;
pub type AppLinkService = LinkService<InMemoryLinkRegistry, ContentFilter>;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<InMemoryLinkRegistry>,
    pub filter: Arc<ContentFilter>,
    pub validation_service: Arc<AppValidationService>,
    pub link_service: Arc<AppLinkService>,
}

impl AppState {
    /// Wires the services around one registry and one content filter.
    pub fn new(
        registry: Arc<InMemoryLinkRegistry>,
        filter: Arc<ContentFilter>,
        base_url: impl Into<String>,
        code_length: usize,
    ) -> Self {
        let validation_service = Arc::new(ValidationService::new(registry.clone(), filter.clone()));
        let link_service = Arc::new(LinkService::new(
            registry.clone(),
            validation_service.clone(),
            base_url,
            code_length,
        ));

        Self {
            registry,
            filter,
            validation_service,
            link_service,
        }
    }

    /// Number of links currently registered.
    pub fn link_count(&self) -> usize {
        self.registry.len()
    }
}
