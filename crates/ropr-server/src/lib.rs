//! # ROPR Server
//!
//! REST server for the revenue-at-risk dashboard.
//!
//! ## Features
//!
//! - Widget catalogue with bounds and defaults
//! - Model outputs for absolute inputs
//! - Full dashboard (metrics, chart, explanation) for raw widget values,
//!   re-requested by the client on every input change
//! - Sensitivity sweeps
//! - Configuration via TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use ropr_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default());
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod handlers;
pub mod routes;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;

/// The ROPR server.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router()
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Bind the configured host and port. Host names are resolved.
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        let listener =
            TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        info!("Starting ROPR server on {}", listener.local_addr()?);
        Ok(listener)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        axum::serve(listener, self.router()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str) -> ServerConfig {
        ServerConfig {
            host: host.to_string(),
            port: 0,
        }
    }

    #[tokio::test]
    async fn test_bind_resolves_host_name() {
        let listener = Server::new(config("localhost")).bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_reports_bad_host() {
        let result = Server::new(config("not a host name")).bind().await;
        assert!(result.is_err());
    }
}
