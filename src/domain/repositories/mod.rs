//! Storage trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for testing.
//!
//! - [`LinkRegistry`] - Short link storage keyed by slug

pub mod link_registry;

pub use link_registry::{InsertOutcome, LinkRegistry};

#[cfg(test)]
pub use link_registry::MockLinkRegistry;
