//! Business logic services for the application layer.

pub mod link_service;
pub mod suggestion_engine;
pub mod validation_service;

pub use link_service::LinkService;
pub use suggestion_engine::{MAX_SUGGESTIONS, SuggestionEngine};
pub use validation_service::ValidationService;
