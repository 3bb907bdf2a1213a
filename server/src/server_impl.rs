//! Main game server implementation
//!
//! Owns the server state and wires the HTTP routes onto it. The random source
//! is injected so tests can pin deals and menus.

use axum::{Router, routing::get, routing::post};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use shared::{ServiceId, process_info};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use crate::traits::RandomSource;
use crate::web::handlers::api;

/// Build the Axum router with all routes
pub fn build_router<R>(state: Arc<ServerState<R>>) -> Router
where
    R: RandomSource + 'static,
{
    Router::new()
        .route("/api/test", get(api::test_endpoint))
        .route("/api/menu/current", get(api::current_menu::<R>))
        .route("/api/menu/full", get(api::full_menu::<R>))
        .route("/api/menu/rules", get(api::rules::<R>))
        .route("/api/join", post(api::join::<R>))
        .route("/api/hand/:player_id", get(api::hand::<R>))
        .route("/api/submit", post(api::submit::<R>))
        .route("/api/round/:round_number", get(api::round::<R>))
        .route("/health", get(api::health_check::<R>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
        .with_state(state)
}

/// Game server with an injected random source
pub struct GameServer<R> {
    state: Arc<ServerState<R>>,
    shutdown_tx: mpsc::Sender<()>,
    shutdown_rx: Option<mpsc::Receiver<()>>,
}

impl<R> GameServer<R>
where
    R: RandomSource + 'static,
{
    /// Create a new game server from startup configuration
    pub fn new(config: &ServerConfig, rng: R) -> Self {
        let state = ServerState::new(config.bind_address, config.game, rng);
        Self::from_state(Arc::new(state))
    }

    /// Wrap an already built state
    pub fn from_state(state: Arc<ServerState<R>>) -> Self {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        Self {
            state,
            shutdown_tx,
            shutdown_rx: Some(shutdown_rx),
        }
    }

    pub fn build_router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Sender that stops a running server
    pub fn get_shutdown_sender(&self) -> mpsc::Sender<()> {
        self.shutdown_tx.clone()
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<ServerState<R>> {
        &self.state
    }

    /// Bind the configured address and serve until shutdown
    pub async fn run(&mut self) -> ServerResult<()> {
        let bind_address = self.state.bind_address;
        let listener = TcpListener::bind(bind_address)
            .await
            .map_err(|e| ServerError::ServerStartup(format!("Failed to bind to {}: {}", bind_address, e)))?;

        self.serve(listener).await
    }

    /// Serve on an existing listener until a shutdown signal arrives
    pub async fn serve(&mut self, listener: TcpListener) -> ServerResult<()> {
        let mut shutdown_rx = self
            .shutdown_rx
            .take()
            .ok_or_else(|| ServerError::ServerStartup("server is already running".to_string()))?;
        let router = self.build_router();
        let local_address = listener.local_addr()?;

        process_info!(ServiceId::current(), "🌐 Game server listening on http://{}", local_address);

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        process_info!(ServiceId::current(), "HTTP server task completed");
        Ok(())
    }
}
