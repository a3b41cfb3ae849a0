//! Route descriptors and the build-time route specification.

use std::fmt;

use crate::routing::method::HttpMethod;

/// Who owns a registration.
///
/// Built-in routes may be overwritten by any later registration for the same
/// path and method; application routes may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteOrigin {
    Builtin,
    Application,
}

/// A resolved route. Immutable once the table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor<H> {
    uri_pattern: String,
    handler: H,
    method: HttpMethod,
    redirect_to: Option<String>,
    honor_extension: bool,
    origin: RouteOrigin,
}

impl<H> RouteDescriptor<H> {
    pub(crate) fn new(
        uri_pattern: String,
        handler: H,
        method: HttpMethod,
        redirect_to: Option<String>,
        honor_extension: bool,
        origin: RouteOrigin,
    ) -> Self {
        Self {
            uri_pattern,
            handler,
            method,
            redirect_to,
            honor_extension,
            origin,
        }
    }

    /// Normalised pattern, e.g. `/users/{id}`.
    pub fn uri_pattern(&self) -> &str {
        &self.uri_pattern
    }

    /// Opaque handler reference supplied at registration.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Redirect target, stored as registered.
    pub fn redirect_to(&self) -> Option<&str> {
        self.redirect_to.as_deref()
    }

    /// Whether content negotiation should take the request's filename
    /// extension into account for this route.
    pub fn honor_extension(&self) -> bool {
        self.honor_extension
    }

    pub fn is_builtin(&self) -> bool {
        self.origin == RouteOrigin::Builtin
    }
}

impl<H: fmt::Display> fmt::Display for RouteDescriptor<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8}{} -> {}", self.method, self.uri_pattern, self.handler)?;
        if let Some(target) = &self.redirect_to {
            write!(f, " (redirect to {})", target)?;
        }
        Ok(())
    }
}

/// One registration request: `(pattern, method, handler, redirect, honor extension)`.
#[derive(Debug, Clone)]
pub struct RouteSpec<H> {
    pub pattern: String,
    pub method: HttpMethod,
    pub handler: H,
    pub redirect_to: Option<String>,
    pub honor_extension: bool,
    pub origin: RouteOrigin,
}

impl<H> RouteSpec<H> {
    /// An application route with no redirect that ignores extensions.
    pub fn new(pattern: impl Into<String>, method: HttpMethod, handler: H) -> Self {
        Self {
            pattern: pattern.into(),
            method,
            handler,
            redirect_to: None,
            honor_extension: false,
            origin: RouteOrigin::Application,
        }
    }

    pub fn get(pattern: impl Into<String>, handler: H) -> Self {
        Self::new(pattern, HttpMethod::Get, handler)
    }

    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect_to = Some(target.into());
        self
    }

    pub fn honor_extension(mut self, honor: bool) -> Self {
        self.honor_extension = honor;
        self
    }

    /// Mark the route as owned by the built-in default handler.
    pub fn builtin(mut self) -> Self {
        self.origin = RouteOrigin::Builtin;
        self
    }

    /// Swap the handler reference for another type, keeping everything else.
    pub fn map_handler<T>(self, f: impl FnOnce(H) -> T) -> RouteSpec<T> {
        RouteSpec {
            pattern: self.pattern,
            method: self.method,
            handler: f(self.handler),
            redirect_to: self.redirect_to,
            honor_extension: self.honor_extension,
            origin: self.origin,
        }
    }
}
