use crate::headers;
use axum::body::Body;
use axum::http::StatusCode;
use axum::response::Response;

/// OPTIONS handler - CORS preflight
///
/// Browsers probe with OPTIONS before certain cross-origin requests. Any
/// path gets 204 with the standard header set and an empty body.
#[utoipa::path(
    options,
    path = "/{*path}",
    responses(
        (status = 204, description = "Preflight accepted, no content")
    ),
    tag = "cors"
)]
pub async fn preflight_handler() -> Response {
    headers::text_response(StatusCode::NO_CONTENT, Body::empty())
}
