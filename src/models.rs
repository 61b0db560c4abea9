use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::router::{RouteDefinition, RouteMatch, View};

/// A route table entry as exposed by the API
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteEntryResponse {
    pub name: String,
    pub path: String,
    pub view: View,
    pub component: String,
    pub params: Vec<String>,
}

impl From<&RouteDefinition> for RouteEntryResponse {
    fn from(route: &RouteDefinition) -> Self {
        Self {
            name: route.name.clone(),
            path: route.path().to_string(),
            view: route.view,
            component: route.view.component().to_string(),
            params: route.pattern.param_names().map(str::to_string).collect(),
        }
    }
}

/// Response type for the route listing endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RoutesResponse {
    pub base: String,
    pub data: Vec<RouteEntryResponse>,
    pub total_count: usize,
}

/// Query parameters for resolve endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ResolveQuery {
    pub path: Option<String>,
}

/// Response type for a successful resolution
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResolveResponse {
    pub name: String,
    pub pattern: String,
    pub path: String,
    pub view: View,
    pub component: String,
    pub params: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
    pub hash: Option<String>,
}

impl From<RouteMatch> for ResolveResponse {
    fn from(route: RouteMatch) -> Self {
        Self {
            component: route.view.component().to_string(),
            name: route.name,
            pattern: route.pattern,
            path: route.path,
            view: route.view,
            params: route.params,
            query: route.query,
            hash: route.hash,
        }
    }
}

/// Response type for reverse routing
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HrefResponse {
    pub name: String,
    pub href: String,
}
