//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the route
//! dispatcher. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

use crate::routing::{HttpMethod, RouteSpec};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DispatchConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions, grouped by controller.
    pub controllers: Vec<ControllerConfig>,
}

impl DispatchConfig {
    /// Flatten every controller into registration specs, one per method.
    pub fn route_specs(&self) -> Vec<RouteSpec<String>> {
        self.controllers
            .iter()
            .flat_map(|controller| controller.route_specs())
            .collect()
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// A group of routes sharing a base path.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerConfig {
    /// Controller identifier for logging.
    pub name: String,

    /// Prefix prepended to every route path.
    #[serde(default)]
    pub base_path: String,

    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

impl ControllerConfig {
    pub fn route_specs(&self) -> Vec<RouteSpec<String>> {
        self.routes
            .iter()
            .flat_map(|route| route.specs(&self.base_path))
            .collect()
    }
}

/// One routed handler.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path pattern, relative to the controller's base path.
    pub path: String,

    /// Methods served (default: GET).
    #[serde(default)]
    pub methods: Vec<HttpMethod>,

    /// Handler identifier handed back on resolution.
    pub handler: String,

    /// Redirect target; when set the transport redirects instead of handling.
    #[serde(default)]
    pub redirect_to: Option<String>,

    /// Let content negotiation consider the request's filename extension.
    #[serde(default)]
    pub honor_extension: bool,
}

impl RouteConfig {
    /// Methods to register, defaulting to GET.
    pub fn effective_methods(&self) -> Vec<HttpMethod> {
        if self.methods.is_empty() {
            vec![HttpMethod::Get]
        } else {
            self.methods.clone()
        }
    }

    fn specs(&self, base_path: &str) -> Vec<RouteSpec<String>> {
        // A blank path stays blank so the registrar can reject it.
        let pattern = if self.path.trim().is_empty() {
            String::new()
        } else {
            format!("{}/{}", base_path.trim(), self.path.trim())
        };

        self.effective_methods()
            .into_iter()
            .map(|method| RouteSpec {
                redirect_to: self.redirect_to.clone(),
                honor_extension: self.honor_extension,
                ..RouteSpec::new(pattern.clone(), method, self.handler.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: DispatchConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.observability.log_level, "info");
        assert!(config.controllers.is_empty());
    }

    #[test]
    fn test_route_specs_expand_methods_and_base_path() {
        let config: DispatchConfig = toml::from_str(
            r#"
            [[controllers]]
            name = "users"
            base_path = "/users"

              [[controllers.routes]]
              path = "/{id}"
              methods = ["GET", "HEAD"]
              handler = "users.show"
              honor_extension = true

              [[controllers.routes]]
              path = "old"
              handler = "users.legacy"
              redirect_to = "/users/list"
            "#,
        )
        .unwrap();

        let specs = config.route_specs();
        assert_eq!(specs.len(), 3);

        assert_eq!(specs[0].pattern, "/users//{id}");
        assert_eq!(specs[0].method, HttpMethod::Get);
        assert!(specs[0].honor_extension);
        assert_eq!(specs[1].method, HttpMethod::Head);

        assert_eq!(specs[2].pattern, "/users/old");
        assert_eq!(specs[2].method, HttpMethod::Get);
        assert_eq!(specs[2].redirect_to.as_deref(), Some("/users/list"));
    }

    #[test]
    fn test_blank_path_stays_blank() {
        let route = RouteConfig {
            path: "  ".into(),
            methods: vec![],
            handler: "h".into(),
            redirect_to: None,
            honor_extension: false,
        };
        let specs = route.specs("/base");
        assert_eq!(specs[0].pattern, "");
    }
}
