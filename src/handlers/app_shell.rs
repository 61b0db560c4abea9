use crate::error::ErrorResponse;
use crate::router::Resolution;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};

/// Header carrying the name of the route a page request resolved to
pub const ROUTE_NAME_HEADER: &str = "x-route-name";

/// Fallback handler - serve the app shell for browser navigation
///
/// Every URL that is not an API path is resolved against the route table.
/// Declared routes get the shell with 200; anything else still gets the
/// shell so the front end can render its not-found page, but with 404.
pub async fn app_shell_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(ErrorResponse {
                error: format!("Method {} not allowed for page routes", method),
            }),
        )
            .into_response();
    }

    let url = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let shell = Html(state.app_shell.to_string());

    match state.route_table.resolve(url) {
        Resolution::Matched(route) => {
            tracing::debug!("Serving app shell for route '{}'", route.name);
            (StatusCode::OK, [(ROUTE_NAME_HEADER, route.name)], shell).into_response()
        }
        Resolution::NotFound { path } => {
            tracing::warn!("No route matches {}", path);
            (StatusCode::NOT_FOUND, shell).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DEFAULT_APP_SHELL;
    use crate::state::test_state;
    use axum::{body::Body, http::Request, Router};
    use tower::ServiceExt;

    fn setup_test_app(base: &str) -> Router {
        Router::new()
            .fallback(app_shell_handler)
            .with_state(test_state(base))
    }

    async fn request(app: Router, method: &str, uri: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_declared_route_serves_shell() {
        let response = request(setup_test_app("/"), "GET", "/start_quiz/12?attempt=1").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[ROUTE_NAME_HEADER], "start_quiz");
        assert!(
            response.headers()["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, DEFAULT_APP_SHELL.as_bytes());
    }

    #[tokio::test]
    async fn test_every_declared_path_serves_shell() {
        for url in [
            "/",
            "/login",
            "/admin",
            "/signup",
            "/manage_subject",
            "/manage_quiz",
            "/add_question/1",
            "/view_questions/1",
            "/user",
            "/start_quiz/1",
            "/user_scorecard",
            "/manage_user",
            "/admin_statistics",
            "/user_statistics",
        ] {
            let response = request(setup_test_app("/"), "GET", url).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", url);
        }
    }

    #[tokio::test]
    async fn test_undeclared_route_is_not_found() {
        let response = request(setup_test_app("/"), "GET", "/logout").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(ROUTE_NAME_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_base_is_required() {
        let response = request(setup_test_app("/quizdom"), "GET", "/quizdom/login").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = request(setup_test_app("/quizdom"), "GET", "/login").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_get_is_rejected() {
        let response = request(setup_test_app("/"), "POST", "/login").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
