//! Handler references used by the HTTP transport.

use std::fmt;

use crate::routing::DefaultRoute;

/// What a resolved route points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// One of the stock pages.
    Builtin(DefaultRoute),
    /// An application handler, identified by its configured name.
    Named(String),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Builtin(route) => fmt::Display::fmt(route, f),
            Endpoint::Named(name) => f.write_str(name),
        }
    }
}
