//! HTTP server wiring: router, listener and graceful shutdown.

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::business::ItemStore;
use crate::error::Result;

use super::handlers::{create_item, delete_item, list_items, update_item};

/// Creates the router with the store as shared state.
pub fn router(store: ItemStore) -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/items", post(create_item))
        .route("/items/{id}", post(update_item).delete(delete_item))
        .with_state(store)
        .layer(TraceLayer::new_for_http())
}

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
    store: ItemStore,
}

impl Server {
    /// Creates a new server bound to `addr` once run.
    pub fn new(addr: SocketAddr, store: ItemStore) -> Self {
        Self { addr, store }
    }

    /// Runs the server until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound or the server fails.
    pub async fn run(self) -> Result<()> {
        let router = router(self.store.clone());

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!(
            addr = %self.addr,
            database = %self.store.path().display(),
            "Server listening"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
