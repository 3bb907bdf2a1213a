//! Shared types for the Kitchen Impossible card game
//!
//! Contains the domain values and HTTP wire messages used by both the
//! game server and the command-line client, plus common logging setup.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    CurrentMenu, ErrorResponse, FullMenu, HandResponse, HealthResponse, JoinRequest, JoinResponse,
    RoundNumber, RoundResponse, RulesResponse, StatusResponse, SubmitRequest, SubmitResponse,
};
