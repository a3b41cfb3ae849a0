//! Build-time routing errors.
//!
//! Both kinds are fatal: they abort startup before any request is served.
//! Resolution itself has no error path.

use thiserror::Error;

use crate::routing::method::HttpMethod;

/// A route definition that cannot be registered as written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The pattern is empty or whitespace only.
    #[error("empty route pattern for {method} handler {handler}")]
    EmptyPattern { method: HttpMethod, handler: String },

    /// A redirect was requested but its target is blank.
    #[error("empty redirect target on {method} {pattern} (handler {handler})")]
    BlankRedirect {
        pattern: String,
        method: HttpMethod,
        handler: String,
    },

    /// No `GET /404` route survived the build.
    #[error("no not-found route registered at GET /404")]
    MissingNotFound,
}

/// Two non-default handlers claim the same path and method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("conflicting routes for {method} {path}:\n\t{existing}\n\t{incoming}")]
pub struct RouteConflictError {
    pub path: String,
    pub method: HttpMethod,
    /// Handler registered first.
    pub existing: String,
    /// Handler whose registration was rejected.
    pub incoming: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Conflict(#[from] RouteConflictError),
}

/// Result type for route registration.
pub type RouteResult<T> = Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_display_names_both_handlers() {
        let err = RouteError::from(RouteConflictError {
            path: "/a".into(),
            method: HttpMethod::Get,
            existing: "a.first".into(),
            incoming: "a.second".into(),
        });
        let msg = err.to_string();
        assert!(msg.contains("GET /a"));
        assert!(msg.contains("a.first"));
        assert!(msg.contains("a.second"));
    }

    #[test]
    fn test_configuration_display() {
        let err = ConfigurationError::EmptyPattern {
            method: HttpMethod::Post,
            handler: "users.create".into(),
        };
        assert_eq!(err.to_string(), "empty route pattern for POST handler users.create");
    }
}
