//! Application layer services implementing business logic.
//!
//! Services orchestrate the content filter, the link registry and the
//! suggestion engine, and provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::validation_service::ValidationService`] - Slug validation and availability
//! - [`services::suggestion_engine::SuggestionEngine`] - Alternative slug generation
//! - [`services::link_service::LinkService`] - Short link creation and retrieval

pub mod services;
