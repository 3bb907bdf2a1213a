//! Server and game configuration

use std::net::SocketAddr;

use crate::error::{ServerError, ServerResult};

pub const DEFAULT_HAND_SIZE: usize = 5;
pub const DEFAULT_COPIES_PER_CATEGORY: usize = 10;
pub const DEFAULT_PORT: u16 = 4000;

/// Deck and dealing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub hand_size: usize,
    pub copies_per_category: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            copies_per_category: DEFAULT_COPIES_PER_CATEGORY,
        }
    }
}

impl GameConfig {
    pub fn new(hand_size: usize, copies_per_category: usize) -> ServerResult<Self> {
        let config = Self { hand_size, copies_per_category };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would leave the deck unable to deal
    pub fn validate(&self) -> ServerResult<()> {
        if self.hand_size == 0 {
            return Err(ServerError::config("hand size must be at least 1"));
        }
        if self.copies_per_category == 0 {
            return Err(ServerError::config("copies per category must be at least 1"));
        }
        Ok(())
    }
}

/// Everything the server needs at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub game: GameConfig,
    pub seed: Option<u64>,
}

impl ServerConfig {
    pub fn new(host: &str, port: u16, game: GameConfig, seed: Option<u64>) -> ServerResult<Self> {
        let bind_address: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|e| ServerError::config(format!("Invalid bind address {}:{}: {}", host, port, e)))?;
        game.validate()?;

        Ok(Self { bind_address, game, seed })
    }
}
