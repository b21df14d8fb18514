#![allow(dead_code)]

use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum::routing::get;
use axum_test::TestServer;
use std::sync::Arc;
use slug_guard::api::handlers::{health_handler, redirect_handler};
use slug_guard::api::routes::api_routes;
use slug_guard::domain::content_filter::ContentFilter;
use slug_guard::domain::entities::ShortLink;
use slug_guard::domain::repositories::LinkRegistry;
use slug_guard::infrastructure::persistence::InMemoryLinkRegistry;
use slug_guard::routes::app_router;
use slug_guard::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080";

pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryLinkRegistry::new()),
        Arc::new(ContentFilter::with_default_words()),
        BASE_URL,
        6,
    )
}

pub fn create_test_link(state: &AppState, id: &str, url: &str) -> ShortLink {
    let link = ShortLink::new(id.to_string(), url.to_string(), BASE_URL);
    state.registry.insert(link.clone());
    link
}

pub fn create_test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/shortlinks/{id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Serves the production router, middleware included.
pub fn create_app_server(state: AppState) -> TestServer {
    let app = ServiceExt::<Request>::into_make_service(app_router(state));

    TestServer::new(app).unwrap()
}
