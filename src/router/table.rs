use std::collections::{BTreeMap, HashMap};

use super::error::RouterError;
use super::location::{Location, normalize_base, strip_base};
use super::pattern::RoutePattern;
use super::view::View;

/// A single entry of the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    pub name: String,
    pub pattern: RoutePattern,
    pub view: View,
}

impl RouteDefinition {
    pub fn new(path: &str, name: &str, view: View) -> Result<Self, RouterError> {
        let pattern = RoutePattern::parse(path)?;
        if name.trim().is_empty() {
            return Err(RouterError::EmptyName(path.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            pattern,
            view,
        })
    }

    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }
}

/// A resolved navigation: the route that matched and everything bound from the URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: String,
    pub pattern: String,
    pub view: View,
    /// Requested path relative to the history base
    pub path: String,
    pub params: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
    pub hash: Option<String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Outcome of resolving a URL against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(RouteMatch),
    NotFound { path: String },
}

impl Resolution {
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    pub fn into_match(self) -> Result<RouteMatch, RouterError> {
        match self {
            Resolution::Matched(route) => Ok(route),
            Resolution::NotFound { path } => Err(RouterError::NotFound(path)),
        }
    }
}

/// Immutable mapping from path patterns to views
///
/// Names and paths are unique across the table. Two paths are considered
/// equal when they match exactly the same URLs, so `/quiz/:id` and
/// `/quiz/:quiz_id` conflict.
#[derive(Debug, Clone)]
pub struct RouteTable {
    base: String,
    routes: Vec<RouteDefinition>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, RouterError> {
        let mut by_name = HashMap::with_capacity(routes.len());
        let mut by_shape: HashMap<String, usize> = HashMap::with_capacity(routes.len());

        for (index, route) in routes.iter().enumerate() {
            if by_name.insert(route.name.clone(), index).is_some() {
                return Err(RouterError::DuplicateName(route.name.clone()));
            }
            if let Some(existing) = by_shape.insert(route.pattern.shape(), index) {
                return Err(RouterError::DuplicatePath {
                    path: route.path().to_string(),
                    existing: routes[existing].path().to_string(),
                });
            }
        }

        Ok(Self {
            base: "/".to_string(),
            routes,
            by_name,
        })
    }

    /// Mount the table under a history base such as `/quizdom/`
    pub fn with_base(mut self, base: &str) -> Result<Self, RouterError> {
        self.base = normalize_base(base)?;
        Ok(self)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&RouteDefinition> {
        self.by_name.get(name).map(|&index| &self.routes[index])
    }

    /// Resolve a browser URL (base, path, query and fragment) to a route
    pub fn resolve(&self, url: &str) -> Resolution {
        let Some(relative) = strip_base(&self.base, url) else {
            tracing::debug!("URL {} lies outside base {}", url, self.base);
            return Resolution::NotFound {
                path: url.to_string(),
            };
        };

        let location = Location::parse(relative);
        if !location.path.starts_with('/') {
            tracing::debug!("Relative path {} matches no route", location.path);
            return Resolution::NotFound {
                path: location.path,
            };
        }
        let segments = location.segments();

        let best = self
            .routes
            .iter()
            .filter_map(|route| {
                route
                    .pattern
                    .match_segments(&segments)
                    .map(|params| (route, params))
            })
            .max_by(|(a, _), (b, _)| a.pattern.rank().cmp(&b.pattern.rank()));

        match best {
            Some((route, params)) => {
                tracing::debug!("Resolved {} to route '{}'", location.path, route.name);
                Resolution::Matched(RouteMatch {
                    name: route.name.clone(),
                    pattern: route.path().to_string(),
                    view: route.view,
                    path: location.path,
                    params,
                    query: location.query,
                    hash: location.hash,
                })
            }
            None => Resolution::NotFound {
                path: location.path,
            },
        }
    }

    /// Build the full URL (including the base) for a named route
    pub fn href(
        &self,
        name: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<String, RouterError> {
        let route = self
            .get(name)
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?;
        let path = route.pattern.build(&route.name, params)?;

        if self.base == "/" {
            Ok(path)
        } else if path == "/" {
            Ok(self.base.clone())
        } else {
            Ok(format!("{}{}", self.base, path))
        }
    }
}
