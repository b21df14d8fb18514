//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Components Checked
///
/// 1. **Registry**: Reports the number of stored links
/// 2. **Content filter**: Confirms the word list was loaded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": { "status": "ok", "message": "3 links" },
///     "content_filter": { "status": "ok", "message": "36 prohibited words" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{} links", state.link_count())),
    };

    let content_filter = if state.filter.is_empty() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("No prohibited words loaded".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} prohibited words", state.filter.len())),
        }
    };

    let healthy = content_filter.status == "ok";

    Json(HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry,
            content_filter,
        },
    })
}
