use crate::headers;
use crate::routes;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

/// GET /api/status handler - release status endpoint
///
/// The stable release answers 200. The broken release answers a scripted 500
/// here, the failure mode a plain liveness probe does not catch.
#[utoipa::path(
    get,
    path = routes::STATUS,
    responses(
        (status = 200, description = "Release is serving correctly", body = String, content_type = "text/plain"),
        (status = 500, description = "Simulated bug in the broken release", body = String, content_type = "text/plain")
    ),
    tag = "status"
)]
pub async fn status_handler(State(state): State<AppState>) -> Response {
    let deployment = state.deployment;
    if deployment.status_healthy {
        headers::text_response(StatusCode::OK, format!("OK from {}", deployment.version))
    } else {
        // Message hard-codes v2, matching what the bad release actually shipped.
        headers::text_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error - Bug in v2!",
        )
    }
}
