//! Route dispatch library.
//!
//! Resolves `(path, method)` pairs to registered route descriptors through a
//! static table and a segment trie, built once at startup and shared
//! read-only with every request task.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::DispatchConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{HttpMethod, RouteDescriptor, RouteSpec, RouteTable, RouteTableBuilder};
