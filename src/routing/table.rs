//! Route registration and resolution.
//!
//! # Responsibilities
//! - Normalise and classify patterns (static vs wildcard)
//! - Reject conflicting registrations at build time
//! - Resolve request paths against the frozen table
//!
//! # Design Decisions
//! - Two-phase: a mutable [`RouteTableBuilder`] produces an immutable
//!   [`RouteTable`]; nothing can register once `build()` has returned
//! - Static table lookup first, then the trie
//! - Built-in default routes may be overwritten silently, application routes
//!   may not
//! - Resolution never fails; `None` means the caller serves [`RouteTable::not_found`]

use std::collections::HashMap;
use std::fmt;

use crate::routing::defaults::{DefaultRoute, NOT_FOUND_PATH};
use crate::routing::descriptor::{RouteDescriptor, RouteSpec};
use crate::routing::error::{ConfigurationError, RouteConflictError, RouteResult};
use crate::routing::method::HttpMethod;
use crate::routing::path::{has_params, normalize, strip_extension};
use crate::routing::trie::{MethodRoutes, RouteTrie};

const INDEX: &str = "index";

/// Build-time registrar.
#[derive(Debug)]
pub struct RouteTableBuilder<H> {
    statics: HashMap<String, MethodRoutes<H>>,
    static_len: usize,
    wildcards: RouteTrie<H>,
}

impl<H: fmt::Display> RouteTableBuilder<H> {
    /// A builder with the built-in default routes already registered.
    ///
    /// `defaults` supplies the handler reference for each of them.
    pub fn new(defaults: impl Fn(DefaultRoute) -> H) -> Self {
        let mut builder = Self::empty();
        for route in DefaultRoute::ALL {
            let spec = RouteSpec::get(route.path(), defaults(route)).builtin();
            builder.insert(spec);
        }
        builder
    }

    /// A builder with nothing registered, not even the not-found route.
    pub fn empty() -> Self {
        Self {
            statics: HashMap::new(),
            static_len: 0,
            wildcards: RouteTrie::new(),
        }
    }

    /// Register one route.
    pub fn register(&mut self, spec: RouteSpec<H>) -> RouteResult<&mut Self> {
        let raw = spec.pattern.trim();
        if raw.is_empty() {
            return Err(ConfigurationError::EmptyPattern {
                method: spec.method,
                handler: spec.handler.to_string(),
            }
            .into());
        }
        let pattern = normalize(raw);

        let redirect_to = match spec.redirect_to.as_deref().map(str::trim) {
            Some("") => {
                return Err(ConfigurationError::BlankRedirect {
                    pattern,
                    method: spec.method,
                    handler: spec.handler.to_string(),
                }
                .into());
            }
            other => other.map(str::to_string),
        };

        let routes = if has_params(&pattern) {
            self.wildcards.routes_mut(&pattern)
        } else {
            self.statics.entry(pattern.clone()).or_default()
        };

        if let Some(existing) = routes.get(&spec.method) {
            if !existing.is_builtin() {
                return Err(RouteConflictError {
                    path: pattern,
                    method: spec.method,
                    existing: existing.handler().to_string(),
                    incoming: spec.handler.to_string(),
                }
                .into());
            }
            tracing::debug!(
                pattern = %pattern,
                method = %spec.method,
                replaced = %existing.handler(),
                handler = %spec.handler,
                "Overriding built-in route"
            );
        }

        self.insert(RouteSpec {
            pattern,
            redirect_to,
            ..spec
        });
        Ok(self)
    }

    /// Register every spec in order, stopping at the first error.
    pub fn register_all<I>(&mut self, specs: I) -> RouteResult<&mut Self>
    where
        I: IntoIterator<Item = RouteSpec<H>>,
    {
        for spec in specs {
            self.register(spec)?;
        }
        Ok(self)
    }
}

impl<H> RouteTableBuilder<H> {
    /// Store a validated spec whose pattern is already normalised.
    fn insert(&mut self, spec: RouteSpec<H>) {
        tracing::debug!(
            pattern = %spec.pattern,
            method = %spec.method,
            "Registering route"
        );

        let wildcard = has_params(&spec.pattern);
        let method = spec.method;
        let descriptor = RouteDescriptor::new(
            spec.pattern,
            spec.handler,
            method,
            spec.redirect_to,
            spec.honor_extension,
            spec.origin,
        );

        if wildcard {
            let replaced = self
                .wildcards
                .routes_mut(descriptor.uri_pattern())
                .insert(method, descriptor);
            if replaced.is_none() {
                self.wildcards.note_inserted();
            }
        } else {
            let replaced = self
                .statics
                .entry(descriptor.uri_pattern().to_string())
                .or_default()
                .insert(method, descriptor);
            if replaced.is_none() {
                self.static_len += 1;
            }
        }
    }

    /// Freeze the table.
    pub fn build(mut self) -> RouteResult<RouteTable<H>> {
        let not_found = self
            .statics
            .get_mut(NOT_FOUND_PATH)
            .and_then(|routes| routes.remove(&HttpMethod::Get))
            .ok_or(ConfigurationError::MissingNotFound)?;
        if self.statics.get(NOT_FOUND_PATH).is_some_and(|routes| routes.is_empty()) {
            self.statics.remove(NOT_FOUND_PATH);
        }

        tracing::info!(
            static_routes = self.static_len,
            wildcard_routes = self.wildcards.len(),
            "Route table built"
        );

        Ok(RouteTable {
            statics: self.statics,
            not_found,
            static_len: self.static_len,
            wildcards: self.wildcards,
        })
    }
}

/// Immutable route table. Share it behind an `Arc`; resolution takes `&self`.
#[derive(Debug)]
pub struct RouteTable<H> {
    statics: HashMap<String, MethodRoutes<H>>,
    /// `GET /404`, held apart from `statics` so it is always present.
    not_found: RouteDescriptor<H>,
    static_len: usize,
    wildcards: RouteTrie<H>,
}

impl<H> RouteTable<H> {
    /// Resolve a request path, already stripped of query and fragment.
    ///
    /// Order: static exact match, static `index` under a trailing slash,
    /// wildcard walk, wildcard walk on `index` under a trailing slash.
    pub fn resolve(&self, uri: &str, method: HttpMethod) -> Option<&RouteDescriptor<H>> {
        let path = strip_extension(uri);
        let trailing_slash = path.ends_with('/');

        let key = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        if let Some(found) = self.find_static(key, method) {
            return Some(found);
        }

        let index = trailing_slash.then(|| format!("{}{}", path, INDEX));
        if let Some(index) = &index {
            if let Some(found) = self.find_static(index, method) {
                return Some(found);
            }
        }

        if let Some(found) = self.wildcards.find(path, method) {
            return Some(found);
        }

        index.and_then(|index| self.wildcards.find(&index, method))
    }

    /// The `GET /404` route.
    pub fn not_found(&self) -> &RouteDescriptor<H> {
        &self.not_found
    }

    /// Resolve, falling back to the not-found route.
    pub fn resolve_or_not_found(&self, uri: &str, method: HttpMethod) -> &RouteDescriptor<H> {
        self.resolve(uri, method).unwrap_or_else(|| self.not_found())
    }

    fn find_static(&self, path: &str, method: HttpMethod) -> Option<&RouteDescriptor<H>> {
        if path == NOT_FOUND_PATH && method == HttpMethod::Get {
            return Some(&self.not_found);
        }
        self.statics.get(path)?.get(&method)
    }

    /// Static routes sorted by pattern then method, followed by wildcard routes.
    pub fn mappings(&self) -> Mappings<'_, H> {
        let mut statics: Vec<_> = self
            .statics
            .values()
            .flat_map(|r| r.values())
            .chain(std::iter::once(&self.not_found))
            .collect();
        statics.sort_by(|a, b| {
            a.uri_pattern()
                .cmp(b.uri_pattern())
                .then(a.method().cmp(&b.method()))
        });

        Mappings {
            statics,
            wildcards: self.wildcards.descriptors(),
        }
    }

    pub fn static_len(&self) -> usize {
        self.static_len
    }

    pub fn wildcard_len(&self) -> usize {
        self.wildcards.len()
    }

    pub fn len(&self) -> usize {
        self.static_len + self.wildcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Snapshot of every registered route, for logging and the `check` command.
#[derive(Debug)]
pub struct Mappings<'a, H> {
    pub statics: Vec<&'a RouteDescriptor<H>>,
    pub wildcards: Vec<&'a RouteDescriptor<H>>,
}

impl<H: fmt::Display> Mappings<'_, H> {
    /// Emit the mapping dump at info level, one event per line.
    pub fn log(&self) {
        for line in self.to_string().lines() {
            tracing::info!("{}", line);
        }
    }
}

impl<H: fmt::Display> fmt::Display for Mappings<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "static mappings:")?;
        for route in &self.statics {
            writeln!(f, "  {}", route)?;
        }
        writeln!(f, "dynamic mappings:")?;
        for route in &self.wildcards {
            writeln!(f, "  {}", route)?;
        }
        Ok(())
    }
}
