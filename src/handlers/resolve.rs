use crate::error::{ApiError, ErrorResponse};
use crate::models::{ResolveQuery, ResolveResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

/// GET /api/resolve handler - Resolve a URL against the route table
///
/// The `path` query parameter is a browser URL, including the history base
/// and optionally a query string and fragment.
#[utoipa::path(
    get,
    path = routes::RESOLVE,
    params(
        ("path" = String, Query, description = "URL to resolve, e.g. /start_quiz/12")
    ),
    responses(
        (status = 200, description = "Route matched", body = ResolveResponse),
        (status = 400, description = "Missing or malformed path", body = ErrorResponse),
        (status = 404, description = "No route matches", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn resolve_handler(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<(StatusCode, Json<ResolveResponse>), ApiError> {
    let path = query
        .path
        .ok_or_else(|| ApiError::InvalidQueryParam("path is required".to_string()))?;

    if !path.starts_with('/') {
        return Err(ApiError::InvalidQueryParam(format!(
            "path must start with '/', got '{}'",
            path
        )));
    }

    let route = state.route_table.resolve(&path).into_match()?;
    tracing::info!("Resolved {} to route '{}'", path, route.name);

    Ok((StatusCode::OK, Json(ResolveResponse::from(route))))
}
