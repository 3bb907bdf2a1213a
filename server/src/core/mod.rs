//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod deck;
pub mod menu;
pub mod state;
pub mod validator;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use deck::Deck;
pub use menu::{MenuCatalog, RULES_TEXT};
pub use state::{GameState, Player};
pub use validator::ValidatedSubmission;
