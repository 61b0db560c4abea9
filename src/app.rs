use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::handlers;
use crate::router::quizdom;
use crate::routes;
use crate::state::AppState;

/// Shell served when no built `index.html` is configured
pub const DEFAULT_APP_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Quizdom</title>
</head>
<body>
<div id="app"></div>
</body>
</html>
"#;

/// Build the shared state: the Quizdom route table mounted at the configured
/// base, and the app shell loaded once up front.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let route_table = quizdom::route_table()
        .and_then(|table| table.with_base(&config.router_base))
        .context("Failed to build route table")?;
    tracing::info!(
        "Route table ready: {} routes under {}",
        route_table.len(),
        route_table.base()
    );

    let app_shell: Arc<str> = match &config.spa_index_path {
        Some(path) => {
            let html = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read app shell from {}", path.display()))?;
            Arc::from(html)
        }
        None => Arc::from(DEFAULT_APP_SHELL),
    };

    Ok(AppState {
        route_table: Arc::new(route_table),
        app_shell,
    })
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::ROUTE_LIST, get(handlers::list_handler))
        .route(routes::RESOLVE, get(handlers::resolve_handler))
        .route(routes::HREF, get(handlers::href_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(handlers::app_shell_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
