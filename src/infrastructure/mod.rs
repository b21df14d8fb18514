//! Infrastructure layer implementing interfaces defined by the domain layer.
//!
//! - [`persistence`] - In-memory link registry

pub mod persistence;
