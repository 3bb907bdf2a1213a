//! Game state tests
//!
//! Scenario tests for joining and submitting against a stacked deck.
