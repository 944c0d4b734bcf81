use crate::config::Config;
use crate::deployment::Deployment;
use crate::handlers::{greeting_handler, health_handler, preflight_handler, status_handler};
use crate::routes;
use crate::state::AppState;
use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::Response;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Classify a request and delegate to the matching handler.
///
/// Ordered, first match wins: preflight, health prefix, status prefix,
/// greeting. Matching is on path prefix, so "/healthz" and "/api/status/db"
/// take the health and status branches.
async fn dispatch(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method == Method::OPTIONS {
        return preflight_handler().await;
    }
    if uri.path().starts_with(routes::HEALTH) {
        return health_handler(State(state)).await;
    }
    if uri.path().starts_with(routes::STATUS) {
        return status_handler(State(state)).await;
    }
    greeting_handler(State(state)).await
}

/// Build the router for one deployment color.
///
/// Every request goes through the fallback: classification is prefix-based,
/// which axum's exact-match route table cannot express.
pub fn router(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve one deployment color until the process exits.
pub async fn serve(config: Config, deployment: Deployment) -> Result<()> {
    let addr = format!("{}:{}", config.service_host, config.service_port);
    let port = config.service_port;

    let state = AppState {
        deployment,
        config: Arc::new(config),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("{} running on port {}", deployment.banner(), port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
