//! REST API client for the game server
//!
//! One typed method per endpoint. Error bodies of the form `{"error": ...}`
//! are surfaced as `ClientError::Api`.

use reqwest::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use shared::{
    CurrentMenu, ErrorResponse, FullMenu, HandResponse, HealthResponse, JoinRequest, JoinResponse, PlayerId,
    RoundResponse, RulesResponse, ServiceId, StatusResponse, SubmitRequest, SubmitResponse, process_debug,
    process_info,
};

use crate::error::{ClientError, ClientResult};

/// REST API client for communicating with the game server
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client for `server_addr`, given as `host:port` or a full URL
    pub fn new(server_addr: &str) -> ClientResult<Self> {
        let trimmed = server_addr.trim_end_matches('/');
        let base_url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };

        let client = reqwest::Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the backend is up - GET /api/test
    pub async fn ping(&self) -> ClientResult<StatusResponse> {
        self.get("/api/test").await
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.get("/health").await
    }

    /// Join the game as `name`, returning the new id and the dealt hand
    pub async fn join(&self, name: &str) -> ClientResult<JoinResponse> {
        let request = JoinRequest {
            name: Some(name.to_string()),
        };
        let joined: JoinResponse = self.post("/api/join", &request).await?;
        process_info!(
            ServiceId::current(),
            "👋 Joined as {} with {} cards",
            joined.player_id,
            joined.hand.len()
        );
        Ok(joined)
    }

    pub async fn hand(&self, player_id: &PlayerId) -> ClientResult<HandResponse> {
        self.get(&format!("/api/hand/{}", player_id)).await
    }

    /// Submit cards toward a course/tier recipe
    pub async fn submit(&self, request: &SubmitRequest) -> ClientResult<SubmitResponse> {
        self.post("/api/submit", request).await
    }

    pub async fn round(&self, round: u32) -> ClientResult<RoundResponse> {
        self.get(&format!("/api/round/{}", round)).await
    }

    pub async fn current_menu(&self) -> ClientResult<CurrentMenu> {
        self.get("/api/menu/current").await
    }

    pub async fn full_menu(&self) -> ClientResult<FullMenu> {
        self.get("/api/menu/full").await
    }

    pub async fn rules(&self) -> ClientResult<RulesResponse> {
        self.get("/api/menu/rules").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        process_debug!(ServiceId::current(), "GET {}", url);

        let response = self.client.get(&url).send().await?;
        decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        process_debug!(ServiceId::current(), "POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await?;
    Err(ClientError::Api {
        status,
        message: error_message(&body),
    })
}

/// Message from an `{"error": ...}` body, or the raw body when it is not one
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|response| response.error)
        .unwrap_or_else(|_| body.to_string())
}
