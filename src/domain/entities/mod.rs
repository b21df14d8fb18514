//! Core domain entities.
//!
//! Entities are plain data structures without business logic.
//!
//! - [`ShortLink`] - A shortened URL keyed by its slug
//! - [`ValidationResult`] - Outcome of validating a candidate slug
//! - [`SlugAvailability`] - Outcome of an availability probe

pub mod short_link;
pub mod validation;

pub use short_link::{ShortLink, short_url_for};
pub use validation::{SlugAvailability, ValidationResult};
