//! Domain layer containing business entities and matching logic.
//!
//! Independent of the HTTP and infrastructure layers.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`content_filter`] - Prohibited-word trie and the [`content_filter::ContentChecker`] seam
//!
//! # Validation Flow
//!
//! 1. Raw input is canonicalized ([`crate::utils::canonicalize`])
//! 2. The slug is checked against the [`content_filter::ContentFilter`]
//! 3. Then against the [`repositories::LinkRegistry`]
//! 4. Rejected-but-clean slugs get alternatives from
//!    [`crate::application::services::SuggestionEngine`]

pub mod content_filter;
pub mod entities;
pub mod repositories;
