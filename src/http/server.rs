//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with the delay route and 404 fallback
//! - Wire up middleware (tracing, request ID)
//! - Serve on a bound listener
//! - Drain in-flight requests on shutdown, bounded by the drain timeout

use std::future::IntoFuture;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::SleepyConfig;
use crate::http::handler;
use crate::http::request::request_id_layers;
use crate::responder::DelayResponder;

/// Error type for server operations.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Accept loop or connection I/O failed.
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// HTTP server for the delay responder.
pub struct HttpServer {
    router: Router,
    config: SleepyConfig,
}

impl HttpServer {
    /// Create a new HTTP server backed by the system clock.
    pub fn new(config: SleepyConfig) -> Self {
        Self::with_responder(config, DelayResponder::new())
    }

    pub fn with_responder(config: SleepyConfig, responder: DelayResponder) -> Self {
        let router = Self::build_router(responder);
        Self { router, config }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(responder: DelayResponder) -> Router {
        Router::new()
            .route("/{delay}", get(handler::delay))
            .fallback(handler::not_found)
            .with_state(responder)
            .layer(TraceLayer::new_for_http())
            .layer(request_id_layers())
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires (or its sender is dropped).
    ///
    /// After the signal, the listener stops accepting and in-flight requests
    /// get `shutdown.drain_timeout_secs` to finish before they are abandoned.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let drain_timeout = Duration::from_secs(self.config.shutdown.drain_timeout_secs);
        let mut drain_signal = shutdown.resubscribe();

        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining in-flight requests");
            })
            .into_future();

        let drain_deadline = async move {
            let _ = drain_signal.recv().await;
            tokio::time::sleep(drain_timeout).await;
        };

        tokio::select! {
            result = serve => result?,
            _ = drain_deadline => {
                tracing::warn!(
                    drain_timeout_secs = drain_timeout.as_secs(),
                    "Drain timeout elapsed, abandoning in-flight requests"
                );
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
