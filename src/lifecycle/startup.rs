//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Register every configured route, then freeze the table
//! - Log the resulting mappings
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The table is fully built before a listener is bound, so request tasks
//!   only ever see the frozen `Arc<RouteTable>`

use std::path::Path;

use thiserror::Error;

use crate::config::{load_config, ConfigError, DispatchConfig};
use crate::http::Endpoint;
use crate::routing::{RouteError, RouteTable, RouteTableBuilder};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table error: {0}")]
    Route(#[from] RouteError),
}

/// Build the frozen route table for `config`.
pub fn build_route_table(config: &DispatchConfig) -> Result<RouteTable<Endpoint>, StartupError> {
    let mut builder = RouteTableBuilder::new(Endpoint::Builtin);

    for controller in &config.controllers {
        tracing::debug!(
            controller = %controller.name,
            base_path = %controller.base_path,
            routes = controller.routes.len(),
            "Registering controller"
        );
        let specs = controller
            .route_specs()
            .into_iter()
            .map(|spec| spec.map_handler(Endpoint::Named));
        builder.register_all(specs)?;
    }

    let table = builder.build()?;
    table.mappings().log();
    Ok(table)
}

/// Load the config file and build its route table.
pub fn load(path: &Path) -> Result<(DispatchConfig, RouteTable<Endpoint>), StartupError> {
    let config = load_config(path)?;
    tracing::info!(
        path = %path.display(),
        controllers = config.controllers.len(),
        "Configuration loaded"
    );

    let table = build_route_table(&config)?;
    Ok((config, table))
}
