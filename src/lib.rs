//! # Slug Guard
//!
//! Custom slug validation and suggestion service for a URL shortener, built
//! with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the prohibited-content trie and the registry trait
//! - **Application Layer** ([`application`]) - Validation, suggestion and link services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory link registry
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Slug canonicalization (`"Hello World!!"` → `"hello-world"`)
//! - Prohibited-word matching that sees through `adm1n`-style spellings
//! - Up to five available, clean alternatives for a taken slug
//! - Atomic check-and-insert so two callers never claim the same slug
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8080"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, SuggestionEngine, ValidationService};
    pub use crate::domain::content_filter::{ContentChecker, ContentFilter};
    pub use crate::domain::entities::{ShortLink, SlugAvailability, ValidationResult};
    pub use crate::domain::repositories::{InsertOutcome, LinkRegistry};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRegistry;
    pub use crate::state::AppState;
    pub use crate::utils::canonicalize::canonicalize;
}
