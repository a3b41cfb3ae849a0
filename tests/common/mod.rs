//! Shared utilities for integration tests.

use std::sync::Arc;

use route_dispatch::config::parse_config;
use route_dispatch::http::Endpoint;
use route_dispatch::lifecycle::build_route_table;
use route_dispatch::routing::{RouteTable, RouteTableBuilder};

/// A builder whose handlers are plain strings.
#[allow(dead_code)]
pub fn string_builder() -> RouteTableBuilder<String> {
    RouteTableBuilder::new(|route| route.to_string())
}

/// Route table built from TOML text.
#[allow(dead_code)]
pub fn table_from_toml(toml: &str) -> Arc<RouteTable<Endpoint>> {
    let config = parse_config(toml).expect("test config should parse");
    Arc::new(build_route_table(&config).expect("test routes should build"))
}

#[allow(dead_code)]
pub const SAMPLE_ROUTES: &str = r#"
[[controllers]]
name = "users"
base_path = "/users"

  [[controllers.routes]]
  path = "/{id}"
  methods = ["GET", "DELETE"]
  handler = "users.show"
  honor_extension = true

  [[controllers.routes]]
  path = "/profile"
  handler = "users.profile"

  [[controllers.routes]]
  path = "/old-profile"
  handler = "users.old_profile"
  redirect_to = "/users/profile"

[[controllers]]
name = "articles"
base_path = "/articles"

  [[controllers.routes]]
  path = "/index"
  handler = "articles.index"
"#;
