//! Test helper utilities for game server integration tests

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceExt;

use kitchen_server::{GameConfig, RandomSource, ServerState, build_router};

/// Create a test bind address; routers under test never bind it
pub fn create_test_address() -> SocketAddr {
    "127.0.0.1:4000".parse().unwrap()
}

/// Router over a fresh state using `rng`
pub fn create_test_router<R: RandomSource + 'static>(rng: R) -> (Router, Arc<ServerState<R>>) {
    let state = Arc::new(ServerState::new(create_test_address(), GameConfig::default(), rng));
    (build_router(state.clone()), state)
}

/// Send a GET and return status plus raw body
pub async fn get(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

/// Send a JSON POST and return status plus raw body
pub async fn post_json<T: Serialize>(router: &Router, uri: &str, body: &T) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(router, request).await
}

/// Send a POST with a raw, possibly malformed, body
pub async fn post_raw(router: &Router, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}
