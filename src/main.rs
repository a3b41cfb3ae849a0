//! Route dispatch server (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │               ROUTE DISPATCH                 │
//!                      │                                              │
//!  startup             │  ┌────────┐    ┌───────────┐    ┌─────────┐  │
//!  ────────────────────┼─▶│ config │───▶│ registrar │───▶│ frozen  │  │
//!                      │  │ (TOML) │    │ (builder) │    │  table  │  │
//!                      │  └────────┘    └───────────┘    └────┬────┘  │
//!                      │                                     │ Arc   │
//!  request             │  ┌────────┐    ┌───────────┐    ┌────▼────┐  │
//!  ────────────────────┼─▶│  http  │───▶│ dispatch  │───▶│resolver │  │
//!                      │  │ server │    │ 404/redir │    │         │  │
//!                      │  └────────┘    └───────────┘    └─────────┘  │
//!                      └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use route_dispatch::config::load_config;
use route_dispatch::http::HttpServer;
use route_dispatch::lifecycle::{signals, startup, Shutdown};
use route_dispatch::observability::init_logging;
use route_dispatch::routing::HttpMethod;

#[derive(Parser)]
#[command(name = "route-dispatch")]
#[command(about = "Resolve requests against a table of configured routes", long_about = None)]
struct Cli {
    /// Route table and server configuration.
    #[arg(short, long, global = true, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the route table and serve HTTP
    Serve,
    /// Build the route table, print every mapping and exit
    Check,
    /// Resolve one path offline
    Resolve {
        /// Request path, query and fragment allowed
        path: String,

        #[arg(short, long, default_value = "GET")]
        method: HttpMethod,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve(&cli.config).await,
        Commands::Check => check(&cli.config),
        Commands::Resolve { path, method } => resolve(&cli.config, &path, method),
    }
}

async fn serve(path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(path)?;
    init_logging(&config.observability.log_level);
    tracing::info!("route-dispatch v0.1.0 starting");

    let routes = Arc::new(startup::build_route_table(&config)?);

    // Bind only after the table is frozen.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        routes = routes.len(),
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    HttpServer::new(&config, routes).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn check(path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let (_, table) = startup::load(path)?;
    print!("{}", table.mappings());
    Ok(())
}

fn resolve(
    path: &std::path::Path,
    target: &str,
    method: HttpMethod,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_, table) = startup::load(path)?;
    let request_path = route_dispatch::routing::path::request_path(target);

    match table.resolve(request_path, method) {
        Some(route) => println!("{}", route),
        None => println!("no match, falls back to: {}", table.not_found()),
    }
    Ok(())
}
