//! Cross-origin policy for the browser frontend.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Allows any origin to call the API with the methods and headers the
/// frontend uses. Preflight `OPTIONS` requests are answered by the layer.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
