// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const ROUTE_LIST: &str = "/api/routes";
pub const RESOLVE: &str = "/api/resolve";
pub const HREF: &str = "/api/href/{name}";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
