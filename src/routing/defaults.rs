//! Built-in default routes.
//!
//! Every table starts with these registered as [`RouteOrigin::Builtin`], so
//! an application may replace any of them without a conflict.
//!
//! [`RouteOrigin::Builtin`]: crate::routing::RouteOrigin::Builtin

use std::fmt;

/// Pattern of the not-found route.
pub const NOT_FOUND_PATH: &str = "/404";

/// Pattern of the server-error route.
pub const SERVER_ERROR_PATH: &str = "/500";

/// Pattern of the favicon route. Requests for `/favicon.ico` reach it once
/// the extension is stripped.
pub const FAVICON_PATH: &str = "/favicon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultRoute {
    Favicon,
    NotFound,
    ServerError,
}

impl DefaultRoute {
    pub const ALL: [DefaultRoute; 3] = [
        DefaultRoute::Favicon,
        DefaultRoute::NotFound,
        DefaultRoute::ServerError,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            DefaultRoute::Favicon => FAVICON_PATH,
            DefaultRoute::NotFound => NOT_FOUND_PATH,
            DefaultRoute::ServerError => SERVER_ERROR_PATH,
        }
    }

    /// Stock response body. The favicon has none.
    pub fn body(&self) -> Option<&'static str> {
        match self {
            DefaultRoute::Favicon => None,
            DefaultRoute::NotFound => Some("The requested resource does not exist."),
            DefaultRoute::ServerError => Some(
                "The server can not process your last request, please try again later.",
            ),
        }
    }
}

impl fmt::Display for DefaultRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultRoute::Favicon => f.write_str("default.favicon"),
            DefaultRoute::NotFound => f.write_str("default.not_found"),
            DefaultRoute::ServerError => f.write_str("default.server_error"),
        }
    }
}
