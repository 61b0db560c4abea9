use thiserror::Error;

/// Errors raised while building or consulting a route table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid history base '{base}': {reason}")]
    InvalidBase { base: String, reason: String },

    #[error("route name must not be empty (path '{0}')")]
    EmptyName(String),

    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    #[error("route path '{path}' conflicts with '{existing}'")]
    DuplicatePath { path: String, existing: String },

    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },

    #[error("no route matches '{0}'")]
    NotFound(String),

    #[error("navigation {0} was superseded by a newer navigation")]
    Superseded(u64),
}

impl RouterError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
