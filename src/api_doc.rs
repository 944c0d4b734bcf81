use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "blue-green-demo API",
        version = "1.0.0",
        description = "Toy blue/green deployment backends with health, status, and greeting endpoints"
    ),
    paths(
        handlers::health::health_handler,
        handlers::status::status_handler,
        handlers::greeting::greeting_handler,
        handlers::preflight::preflight_handler
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "status", description = "Release status endpoint"),
        (name = "greeting", description = "Catch-all greeting"),
        (name = "cors", description = "CORS preflight handling")
    )
)]
pub struct ApiDoc;
