use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::Response;

/// CORS and caching headers stamped on every response, including preflight
/// and error branches. Values match what deployment tooling and browser
/// clients expect from both backend colors.
pub const STANDARD_HEADERS: [(&str, &str); 8] = [
    ("content-type", "text/plain"),
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, PUT, DELETE, OPTIONS"),
    (
        "access-control-allow-headers",
        "Content-Type, Cache-Control, Pragma, Expires, Authorization, X-Requested-With",
    ),
    ("access-control-max-age", "86400"),
    (
        "cache-control",
        "no-store, no-cache, must-revalidate, proxy-revalidate",
    ),
    ("pragma", "no-cache"),
    ("expires", "0"),
];

/// Build a plain-text response carrying the standard header set.
///
/// Headers are constructed fresh per call; no response state is shared
/// between requests.
pub fn text_response(status: StatusCode, body: impl Into<Body>) -> Response {
    let mut response = Response::new(body.into());
    *response.status_mut() = status;

    let headers = response.headers_mut();
    for (name, value) in STANDARD_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }

    response
}
