//! Utility functions for slug handling and link creation.
//!
//! - [`canonicalize`] - Free-form input to canonical slug
//! - [`code_generator`] - Random short codes for links without a custom slug
//! - [`url_normalizer`] - Target URL validation and normalization

pub mod canonicalize;
pub mod code_generator;
pub mod url_normalizer;
