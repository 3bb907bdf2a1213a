//! Integration tests for the HTTP API
//!
//! Drive the real router in-process and check status codes, bodies and the
//! resulting game state.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

use fixtures::*;
use helpers::*;
use kitchen_server::RealRandomSource;
use shared::Category::{self, *};
use shared::{
    CurrentMenu, ErrorResponse, FullMenu, HandResponse, HealthResponse, JoinResponse, RoundNumber, RoundResponse,
    RulesResponse, StatusResponse, SubmitRequest, SubmitResponse, TierName,
};

#[tokio::test]
async fn test_backend_test_route() {
    let (router, _) = create_test_router(RealRandomSource::seeded(1));

    let (status, body) = get(&router, "/api/test").await;
    assert_eq!(status, StatusCode::OK);

    let response: StatusResponse = parse(&body);
    assert_eq!(response.status, "ok");
    assert_eq!(response.message, "Backend is running");
}

#[tokio::test]
async fn test_menu_routes() {
    let (router, _) = create_test_router(stacked_random_source(vec![], 1));

    let (status, body) = get(&router, "/api/menu/current").await;
    assert_eq!(status, StatusCode::OK);
    let current: CurrentMenu = parse(&body);
    assert_eq!(current.len(), 3);
    assert!(current.values().all(|tier| tier.name == TierName::Intermediate));

    let (status, body) = get(&router, "/api/menu/full").await;
    assert_eq!(status, StatusCode::OK);
    let full: FullMenu = parse(&body);
    assert!(full.values().all(|tiers| tiers.len() == 3));

    let raw: Value = parse(&body);
    assert_eq!(raw["Appetizer"][2]["ingredientsRequired"]["Fats/Oils"], 1);
    assert_eq!(raw["Entree"][2]["salePrice"], 25);

    let (status, body) = get(&router, "/api/menu/rules").await;
    assert_eq!(status, StatusCode::OK);
    let rules: RulesResponse = parse(&body);
    assert!(rules.rules_text.contains("Kitchen Impossible"));
}

#[tokio::test]
async fn test_join_returns_five_cards() {
    let (router, state) = create_test_router(RealRandomSource::seeded(2));

    for name in ["Remy", "Colette", "Linguini"] {
        let (status, body) = post_json(&router, "/api/join", &json!({ "name": name })).await;
        assert_eq!(status, StatusCode::OK);

        let joined: JoinResponse = parse(&body);
        assert_eq!(joined.hand.len(), 5);
        assert!(joined.hand.iter().all(|card| Category::ALL.contains(&card.category)));
    }
    assert_eq!(state.game.lock().await.player_count(), 3);
}

#[tokio::test]
async fn test_join_without_name_is_bad_request() {
    let (router, state) = create_test_router(RealRandomSource::seeded(3));

    let (status, body) = post_json(&router, "/api/join", &json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "name required");

    let (status, _) = post_json(&router, "/api/join", &json!({ "name": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_raw(&router, "/api/join", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(state.game.lock().await.player_count(), 0);
}

#[tokio::test]
async fn test_hand_lookup() {
    let (router, _) = create_test_router(stacked_random_source(protein_heavy_hand(), 0));

    let (_, body) = post_json(&router, "/api/join", &json!({ "name": "Remy" })).await;
    let joined: JoinResponse = parse(&body);

    let (status, body) = get(&router, &format!("/api/hand/{}", joined.player_id)).await;
    assert_eq!(status, StatusCode::OK);
    let hand: HandResponse = parse(&body);
    assert_eq!(hand.hand, cards(&protein_heavy_hand()));

    let (status, body) = get(&router, "/api/hand/not-a-player").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = parse(&body);
    assert!(error.error.contains("not-a-player"));
}

#[tokio::test]
async fn test_submit_simple_appetizer() {
    let (router, state) = create_test_router(stacked_random_source(protein_heavy_hand(), 0));

    let (_, body) = post_json(&router, "/api/join", &json!({ "name": "Remy" })).await;
    let joined: JoinResponse = parse(&body);

    let request = SubmitRequest::new(joined.player_id, "Appetizer", "Simple", cards(&[Protein, Veggie]));
    let (status, body) = post_json(&router, "/api/submit", &request).await;
    assert_eq!(status, StatusCode::OK);
    let response: SubmitResponse = parse(&body);
    assert!(response.success);

    let (_, body) = get(&router, &format!("/api/hand/{}", joined.player_id)).await;
    let hand: HandResponse = parse(&body);
    assert_eq!(hand.hand, cards(&[Protein, Sweets, Fruits]));

    let game = state.game.lock().await;
    assert_eq!(game.list_submissions(1).1.len(), 1);
}

#[tokio::test]
async fn test_rejected_submissions_change_nothing() {
    let (router, _) = create_test_router(stacked_random_source(protein_heavy_hand(), 0));

    let (_, body) = post_json(&router, "/api/join", &json!({ "name": "Remy" })).await;
    let joined: JoinResponse = parse(&body);

    let attempts = [
        SubmitRequest::new(joined.player_id, "Appetizer", "Complex", cards(&[Protein, Veggie])),
        SubmitRequest::new(joined.player_id, "Appetizer", "Simple", cards(&[Protein, Sauces])),
        SubmitRequest::new(joined.player_id, "Soup", "Simple", cards(&[Protein])),
        SubmitRequest::new(joined.player_id, "Dessert", "Legendary", cards(&[Sweets])),
    ];
    for attempt in &attempts {
        let (status, _) = post_json(&router, "/api/submit", attempt).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (_, body) = get(&router, &format!("/api/hand/{}", joined.player_id)).await;
    let hand: HandResponse = parse(&body);
    assert_eq!(hand.hand, cards(&protein_heavy_hand()));

    let (_, body) = get(&router, "/api/round/1").await;
    let round: RoundResponse = parse(&body);
    assert!(round.submissions.is_empty());
}

#[tokio::test]
async fn test_submit_error_bodies() {
    let (router, _) = create_test_router(stacked_random_source(protein_heavy_hand(), 0));

    let (_, body) = post_json(&router, "/api/join", &json!({ "name": "Remy" })).await;
    let joined: JoinResponse = parse(&body);

    let request = SubmitRequest::new(joined.player_id, "Appetizer", "Intermediate", cards(&[Protein, Veggie, Sauces]));
    let (status, body) = post_json(&router, "/api/submit", &request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = parse(&body);
    assert!(error.error.contains("Sauces"));

    let (status, body) = post_json(&router, "/api/submit", &json!({ "playerId": joined.player_id })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "fields required");

    let unknown = SubmitRequest::new(shared::PlayerId::new(), "Appetizer", "Simple", cards(&[Protein]));
    let (status, _) = post_json(&router, "/api/submit", &unknown).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let bad_card = json!({
        "playerId": joined.player_id,
        "course": "Appetizer",
        "tier": "Simple",
        "cards": [{ "type": "Cheese" }]
    });
    let (status, _) = post_json(&router, "/api/submit", &bad_card).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let numeric_id = json!({
        "playerId": 42,
        "course": "Appetizer",
        "tier": "Simple",
        "cards": [{ "type": "Protein" }]
    });
    let (status, _) = post_json(&router, "/api/submit", &numeric_id).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_round_number_is_echoed_but_not_used_as_filter() {
    // Known defect kept as-is: any round returns the full history
    let (router, _) = create_test_router(stacked_random_source(protein_heavy_hand(), 0));

    let (_, body) = post_json(&router, "/api/join", &json!({ "name": "Remy" })).await;
    let joined: JoinResponse = parse(&body);
    let request = SubmitRequest::new(joined.player_id, "Appetizer", "Simple", cards(&[Protein, Veggie]));
    post_json(&router, "/api/submit", &request).await;

    let (status, body) = get(&router, "/api/round/1").await;
    assert_eq!(status, StatusCode::OK);
    let first: RoundResponse = parse(&body);

    let (_, body) = get(&router, "/api/round/999").await;
    let far: RoundResponse = parse(&body);

    assert_eq!(first.round, RoundNumber::Number(1));
    assert_eq!(far.round, RoundNumber::Number(999));
    assert_eq!(first.submissions, far.submissions);
    assert_eq!(far.submissions.len(), 1);
    assert_eq!(far.submissions[0].player_id, joined.player_id);

}

#[tokio::test]
async fn test_any_round_segment_returns_full_history() {
    let (router, _) = create_test_router(stacked_random_source(protein_heavy_hand(), 0));

    let (_, body) = post_json(&router, "/api/join", &json!({ "name": "Remy" })).await;
    let joined: JoinResponse = parse(&body);
    let request = SubmitRequest::new(joined.player_id, "Appetizer", "Simple", cards(&[Protein, Veggie]));
    post_json(&router, "/api/submit", &request).await;

    let (_, body) = get(&router, "/api/round/1").await;
    let first: RoundResponse = parse(&body);

    let cases = [
        ("latest", RoundNumber::Raw("latest".to_string())),
        ("-1", RoundNumber::Number(-1)),
        ("99999999999", RoundNumber::Number(99_999_999_999)),
    ];
    for (segment, echoed) in cases {
        let (status, body) = get(&router, &format!("/api/round/{segment}")).await;
        assert_eq!(status, StatusCode::OK, "round {segment}");

        let response: RoundResponse = parse(&body);
        assert_eq!(response.round, echoed);
        assert_eq!(response.submissions, first.submissions);
    }

    let (_, body) = get(&router, "/api/round/latest").await;
    let raw: Value = parse(&body);
    assert_eq!(raw["round"], "latest");
}

#[tokio::test]
async fn test_health_check() {
    let (router, _) = create_test_router(RealRandomSource::seeded(4));
    post_json(&router, "/api/join", &json!({ "name": "Remy" })).await;

    let (status, body) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = parse(&body);
    assert_eq!(health.status, "healthy");
    assert_eq!(health.players, 1);
}

#[tokio::test]
async fn test_cors_is_open() {
    let (router, _) = create_test_router(RealRandomSource::seeded(5));

    let request = axum::http::Request::builder()
        .uri("/api/test")
        .header("origin", "http://localhost:8080")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(router, request).await.unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
