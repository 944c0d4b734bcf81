use crate::headers;
use crate::routes;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

/// GET /health handler - liveness probe
///
/// Both colors answer healthily here; the load balancer uses this to decide
/// whether an instance may receive traffic at all. Release breakage shows up
/// on the status endpoint instead.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Instance is up", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let deployment = state.deployment;
    headers::text_response(
        StatusCode::OK,
        format!("OK from {}({})!", deployment.version, deployment.color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::deployment::Deployment;
    use axum::{body::Body, http::Request, routing::get, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(deployment: Deployment) -> Router {
        let config = Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };

        Router::new()
            .route(crate::routes::HEALTH, get(health_handler))
            .with_state(AppState {
                deployment,
                config: Arc::new(config),
            })
    }

    #[tokio::test]
    async fn test_health_blue() {
        let response = test_app(Deployment::BLUE)
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"OK from v1(Blue)!");
    }

    #[tokio::test]
    async fn test_health_green_buggy() {
        let response = test_app(Deployment::GREEN_BUGGY)
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"OK from v2-buggy(Green)!");
    }
}
