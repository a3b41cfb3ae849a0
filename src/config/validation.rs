//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, `host:port` addresses)
//! - Catch blank route definitions before the registrar sees them
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DispatchConfig → Result<(), Vec<ValidationError>>
//! - Route conflicts are left to the registrar, which sees normalised patterns

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::DispatchConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a host:port address")]
    BindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    LogLevel(String),

    #[error("controller {0:?} is defined more than once")]
    DuplicateController(String),

    #[error("controller {controller:?} route #{index} has an empty path")]
    EmptyPath { controller: String, index: usize },

    #[error("controller {controller:?} route #{index} has an empty handler")]
    EmptyHandler { controller: String, index: usize },

    #[error("controller {controller:?} route #{index} has an empty redirect_to")]
    EmptyRedirect { controller: String, index: usize },
}

/// A socket address, or a `host:port` pair whose host is resolved at bind time.
fn is_bind_address(addr: &str) -> bool {
    if addr.parse::<SocketAddr>().is_ok() {
        return true;
    }
    match addr.rsplit_once(':') {
        Some((host, port)) => {
            !host.is_empty()
                && !host.contains(|c: char| c.is_whitespace() || c == ':')
                && port.parse::<u16>().is_ok()
        }
        None => false,
    }
}

/// Check everything the registrar cannot.
pub fn validate_config(config: &DispatchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_bind_address(&config.listener.bind_address) {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    let mut seen = HashSet::new();
    for controller in &config.controllers {
        if !seen.insert(controller.name.as_str()) {
            errors.push(ValidationError::DuplicateController(controller.name.clone()));
        }

        for (index, route) in controller.routes.iter().enumerate() {
            let name = &controller.name;
            if route.path.trim().is_empty() {
                errors.push(ValidationError::EmptyPath {
                    controller: name.clone(),
                    index,
                });
            }
            if route.handler.trim().is_empty() {
                errors.push(ValidationError::EmptyHandler {
                    controller: name.clone(),
                    index,
                });
            }
            if route
                .redirect_to
                .as_deref()
                .is_some_and(|target| target.trim().is_empty())
            {
                errors.push(ValidationError::EmptyRedirect {
                    controller: name.clone(),
                    index,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
