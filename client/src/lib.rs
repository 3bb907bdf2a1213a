//! Command line client for the Kitchen Impossible game server

pub mod api_client;
pub mod error;
pub mod input;

pub use api_client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use input::parse_cards;
