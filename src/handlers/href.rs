use crate::error::{ApiError, ErrorResponse};
use crate::models::HrefResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::Query, extract::State, http::StatusCode, Json};
use std::collections::BTreeMap;

/// GET /api/href/{name} handler - Build the URL of a named route
///
/// Route parameters are passed as query parameters, e.g.
/// `/api/href/start_quiz?quiz_id=12`. Parameters the route does not use
/// are ignored.
#[utoipa::path(
    get,
    path = routes::HREF,
    params(
        ("name" = String, Path, description = "Route name, e.g. start_quiz")
    ),
    responses(
        (status = 200, description = "URL built", body = HrefResponse),
        (status = 400, description = "Required route parameter missing", body = ErrorResponse),
        (status = 404, description = "Unknown route name", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn href_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Result<(StatusCode, Json<HrefResponse>), ApiError> {
    let href = state.route_table.href(&name, &params)?;
    tracing::debug!("Built href {} for route '{}'", href, name);

    Ok((StatusCode::OK, Json(HrefResponse { name, href })))
}
