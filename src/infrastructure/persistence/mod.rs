//! Link storage implementations.

mod memory_registry;

pub use memory_registry::InMemoryLinkRegistry;
