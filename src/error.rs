use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::router::RouterError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub routes: usize,
}

/// Custom error type for API endpoints
///
/// Maps router failures and request problems to HTTP status codes and
/// formats them as JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// Route table lookup or href building failed
    Router(RouterError),
    /// Invalid or missing query parameter
    InvalidQueryParam(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Router(err) => {
                let status = match &err {
                    RouterError::NotFound(_) | RouterError::UnknownRoute(_) => {
                        StatusCode::NOT_FOUND
                    }
                    RouterError::MissingParam { .. } => StatusCode::BAD_REQUEST,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.to_string())
            }
            ApiError::InvalidQueryParam(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameter: {}", msg),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<RouterError> for ApiError {
    fn from(err: RouterError) -> Self {
        ApiError::Router(err)
    }
}
