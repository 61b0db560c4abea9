use crate::router::RouteTable;
use std::sync::Arc;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub route_table: Arc<RouteTable>,
    /// HTML served for app routes
    pub app_shell: Arc<str>,
}

#[cfg(test)]
pub(crate) fn test_state(base: &str) -> AppState {
    let table = crate::router::quizdom::route_table()
        .and_then(|table| table.with_base(base))
        .expect("Failed to build route table");

    AppState {
        route_table: Arc::new(table),
        app_shell: Arc::from(crate::app::DEFAULT_APP_SHELL),
    }
}
