use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{HrefResponse, ResolveResponse, RouteEntryResponse, RoutesResponse};
use crate::router::View;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "quizdom-router API",
        version = "1.0.0",
        description = "Route table and history-mode app shell for the Quizdom quiz application"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::resolve::resolve_handler,
        handlers::href::href_handler
    ),
    components(
        schemas(
            View,
            RouteEntryResponse,
            RoutesResponse,
            ResolveResponse,
            HrefResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "routes", description = "Route table lookup and reverse routing")
    )
)]
pub struct ApiDoc;
