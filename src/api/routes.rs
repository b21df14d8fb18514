//! API route configuration.

use crate::api::handlers::{
    create_short_link_handler, get_short_link_handler, list_short_links_handler,
    suggest_slug_handler, validate_slug_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /shortlinks`            - Create a short link
/// - `GET  /shortlinks`            - List all short links
/// - `GET  /shortlinks/{id}`       - Short link details
/// - `POST /shortlinks/validate`   - Validate a custom slug
/// - `GET  /shortlinks/suggest`    - Slug availability and alternatives
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shortlinks",
            post(create_short_link_handler).get(list_short_links_handler),
        )
        .route("/shortlinks/validate", post(validate_slug_handler))
        .route("/shortlinks/suggest", get(suggest_slug_handler))
        .route("/shortlinks/{id}", get(get_short_link_handler))
}
