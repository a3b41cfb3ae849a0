//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the dispatch handler as fallback
//! - Wire up middleware (tracing, timeout)
//! - Bind server to listener
//! - Stop on the shutdown broadcast

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::schema::TimeoutConfig;
use crate::config::DispatchConfig;
use crate::http::dispatch::{dispatch, AppState};
use crate::http::endpoint::Endpoint;
use crate::routing::RouteTable;

/// HTTP front end for a frozen route table.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server. `routes` must already be built.
    pub fn new(config: &DispatchConfig, routes: Arc<RouteTable<Endpoint>>) -> Self {
        Self {
            router: build_router(routes, &config.timeouts),
        }
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(routes: Arc<RouteTable<Endpoint>>, timeouts: &TimeoutConfig) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(AppState { routes })
        .layer(TimeoutLayer::new(Duration::from_secs(timeouts.request_secs)))
        .layer(TraceLayer::new_for_http())
}
