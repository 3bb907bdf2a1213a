//! HTTP surface of the game server

pub mod handlers;
