//! REST API handlers
//!
//! Thin mapping from HTTP requests onto the game state

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use chrono::Utc;
use std::sync::Arc;

use shared::{
    CurrentMenu, FullMenu, HandResponse, HealthResponse, JoinRequest, JoinResponse, RoundNumber, RoundResponse,
    RulesResponse, ServiceId, StatusResponse, SubmitRequest, SubmitResponse, process_info, process_warn,
};

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use crate::traits::RandomSource;

/// Liveness probe kept from the first version of the backend - /api/test
pub async fn test_endpoint() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        message: "Backend is running".to_string(),
    })
}

/// One random tier per course, drawn fresh on every request - /api/menu/current
pub async fn current_menu<R>(State(state): State<Arc<ServerState<R>>>) -> Json<CurrentMenu>
where
    R: RandomSource + 'static,
{
    let menu = state.game.lock().await.current_menu(&state.menu);
    Json(menu)
}

/// The whole catalog - /api/menu/full
pub async fn full_menu<R>(State(state): State<Arc<ServerState<R>>>) -> Json<FullMenu>
where
    R: RandomSource + 'static,
{
    Json(state.menu.full().clone())
}

/// Rules text - /api/menu/rules
pub async fn rules<R>(State(state): State<Arc<ServerState<R>>>) -> Json<RulesResponse>
where
    R: RandomSource + 'static,
{
    Json(RulesResponse {
        rules_text: state.menu.rules_text().to_string(),
    })
}

/// Join the game - /api/join
pub async fn join<R>(
    State(state): State<Arc<ServerState<R>>>,
    payload: Result<Json<JoinRequest>, JsonRejection>,
) -> ServerResult<Json<JoinResponse>>
where
    R: RandomSource + 'static,
{
    let Json(request) = payload.map_err(|e| ServerError::invalid_input(e.body_text()))?;
    let name = request.name.unwrap_or_default();

    let joined = state.game.lock().await.add_player(&name);
    let (player_id, hand) = joined.inspect_err(|e| {
        process_warn!(ServiceId::current(), "🚫 Join rejected: {}", e);
    })?;

    process_info!(
        ServiceId::current(),
        "👋 {} joined as {} with {} cards",
        name.trim(),
        player_id,
        hand.len()
    );

    Ok(Json(JoinResponse { player_id, hand }))
}

/// A player's current hand - /api/hand/:player_id
pub async fn hand<R>(
    State(state): State<Arc<ServerState<R>>>,
    Path(player_id): Path<String>,
) -> ServerResult<Json<HandResponse>>
where
    R: RandomSource + 'static,
{
    let game = state.game.lock().await;
    let player = game.find_player(&player_id)?;

    Ok(Json(HandResponse {
        hand: player.hand.clone(),
    }))
}

/// Submit cards toward a course/tier recipe - /api/submit
pub async fn submit<R>(
    State(state): State<Arc<ServerState<R>>>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> ServerResult<Json<SubmitResponse>>
where
    R: RandomSource + 'static,
{
    let Json(request) = payload.map_err(|e| ServerError::invalid_input(e.body_text()))?;

    let outcome = state.game.lock().await.submit(&state.menu, &request);
    match outcome {
        Ok(submission) => {
            process_info!(
                ServiceId::current(),
                "🍽️ {} submitted {} cards for {} {}",
                submission.player_id,
                submission.cards.len(),
                submission.tier,
                submission.course
            );
            Ok(Json(SubmitResponse { success: true }))
        }
        Err(e) => {
            process_warn!(ServiceId::current(), "🚫 Submission rejected: {}", e);
            Err(e)
        }
    }
}

/// Submissions for a round - /api/round/:round_number
///
/// Every stored submission comes back regardless of the round asked for, and
/// any path segment is accepted and echoed.
pub async fn round<R>(
    State(state): State<Arc<ServerState<R>>>,
    Path(requested): Path<String>,
) -> Json<RoundResponse>
where
    R: RandomSource + 'static,
{
    let game = state.game.lock().await;
    let (round, submissions) = game.list_submissions(RoundNumber::parse(&requested));

    Json(RoundResponse {
        round,
        submissions: submissions.to_vec(),
    })
}

/// Health check endpoint - /health
pub async fn health_check<R>(State(state): State<Arc<ServerState<R>>>) -> Json<HealthResponse>
where
    R: RandomSource + 'static,
{
    let players = state.game.lock().await.player_count();

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().timestamp(),
        uptime: state.get_uptime_seconds(),
        players,
    })
}
