//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod shortlinks;
pub mod slugs;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shortlinks::{create_short_link_handler, get_short_link_handler, list_short_links_handler};
pub use slugs::{suggest_slug_handler, validate_slug_handler};
