//! Game server library for Kitchen Impossible
//!
//! Players join, receive a hand of ingredient cards and submit cards toward
//! menu recipes over a small JSON HTTP API.

pub mod config;
pub mod core;
pub mod error;
pub mod server_impl;
pub mod services;
pub mod state;
pub mod traits;
pub mod web;

// Re-export main types
pub use config::{GameConfig, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server_impl::{GameServer, build_router};
pub use state::ServerState;

// Re-export trait definitions
pub use traits::RandomSource;

// Re-export service implementations
pub use services::RealRandomSource;
