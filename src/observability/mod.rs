//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → stdout (fmt layer)
//! ```
//!
//! # Design Decisions
//! - Structured fields rather than formatted strings where possible
//! - Request ID attached to every per-request log line

pub mod logging;

pub use logging::init_logging;
