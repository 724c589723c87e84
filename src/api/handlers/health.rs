//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Link table loaded
/// - **503 Service Unavailable**: Link table is empty, every request would 404
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "domain": "s.example.com",
///   "checks": {
///     "links": {
///       "status": "ok",
///       "message": "12 keys (9 single, 3 multi-link with 27 aliases)"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let links_check = check_links(&state);

    let all_healthy = links_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        domain: state.redirect_service.domain().map(str::to_string),
        checks: HealthChecks { links: links_check },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports the size of the compiled link table.
fn check_links(state: &AppState) -> CheckStatus {
    let summary = state.redirect_service.summary();

    if summary.keys == 0 {
        CheckStatus {
            status: "error".to_string(),
            message: Some("No links configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "{} keys ({} single, {} multi-link with {} aliases)",
                summary.keys, summary.single, summary.multiple, summary.aliases
            )),
        }
    }
}
