use crate::models::{RouteEntryResponse, RoutesResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/routes handler - List the route table
///
/// Returns every route in declaration order, with its view, the component
/// that renders it and the parameters its path binds.
#[utoipa::path(
    get,
    path = routes::ROUTE_LIST,
    responses(
        (status = 200, description = "Declared routes", body = RoutesResponse)
    ),
    tag = "routes"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<RoutesResponse>) {
    let data: Vec<RouteEntryResponse> = state
        .route_table
        .routes()
        .iter()
        .map(RouteEntryResponse::from)
        .collect();

    let response = RoutesResponse {
        base: state.route_table.base().to_string(),
        total_count: data.len(),
        data,
    };

    (StatusCode::OK, Json(response))
}
