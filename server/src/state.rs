//! Server state shared with every request handler
//!
//! Built once at startup and dropped at shutdown. The game state sits behind a
//! single mutex so each handler's read-validate-commit sequence runs alone.

use std::net::SocketAddr;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::config::GameConfig;
use crate::core::{GameState, MenuCatalog};
use crate::traits::RandomSource;

pub struct ServerState<R> {
    pub bind_address: SocketAddr,
    pub server_start_time: Instant,
    pub menu: MenuCatalog,
    pub game: Mutex<GameState<R>>,
}

impl<R: RandomSource> ServerState<R> {
    /// Create a new server state with the standard menu
    pub fn new(bind_address: SocketAddr, config: GameConfig, rng: R) -> Self {
        Self::with_menu(bind_address, MenuCatalog::standard(), config, rng)
    }

    pub fn with_menu(bind_address: SocketAddr, menu: MenuCatalog, config: GameConfig, rng: R) -> Self {
        Self {
            bind_address,
            server_start_time: Instant::now(),
            menu,
            game: Mutex::new(GameState::new(config, rng)),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
