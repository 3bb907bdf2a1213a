//! Message types for the card game HTTP interface
//!
//! - `api`: request and response bodies for every `/api` endpoint

pub mod api;

pub use api::{
    CurrentMenu, ErrorResponse, FullMenu, HandResponse, HealthResponse, JoinRequest, JoinResponse,
    RoundNumber, RoundResponse, RulesResponse, StatusResponse, SubmitRequest, SubmitResponse,
};
