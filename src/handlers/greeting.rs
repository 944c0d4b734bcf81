use crate::headers;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use chrono::{SecondsFormat, Utc};

/// Catch-all handler - greeting page
///
/// Any request that is not a preflight, health, or status probe lands here,
/// whatever the method. The timestamp is RFC 3339 UTC with millisecond
/// precision and a trailing Z.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting with deployment color and server time", body = String, content_type = "text/plain")
    ),
    tag = "greeting"
)]
pub async fn greeting_handler(State(state): State<AppState>) -> Response {
    let deployment = state.deployment;
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    headers::text_response(
        StatusCode::OK,
        format!(
            "Hello from {} {}! Color: {} | Time: {}",
            deployment.demo_name, deployment.version, deployment.color, now
        ),
    )
}
