//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, strip query/fragment)
//!     → dispatch.rs (method mapping, route resolution, redirect / 404)
//!     → Send to client
//! ```

pub mod dispatch;
pub mod endpoint;
pub mod request;
pub mod server;

pub use endpoint::Endpoint;
pub use request::{request_id, X_REQUEST_ID};
pub use server::{build_router, HttpServer};
