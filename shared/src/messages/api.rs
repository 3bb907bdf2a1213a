//! HTTP request and response bodies
//!
//! Field names follow the JSON the browser client always used (camelCase).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Card, Course, PlayerId, Submission, Tier};

/// One randomly chosen tier per course
pub type CurrentMenu = BTreeMap<Course, Tier>;

/// Every course with its ordered tiers
pub type FullMenu = BTreeMap<Course, Vec<Tier>>;

/// POST /api/join
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JoinRequest {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinResponse {
    pub player_id: PlayerId,
    pub hand: Vec<Card>,
}

/// GET /api/hand/:playerId
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandResponse {
    pub hand: Vec<Card>,
}

/// POST /api/submit
///
/// Every field is optional on the wire so a missing field is reported as
/// invalid input rather than a body parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub player_id: Option<String>,
    pub course: Option<String>,
    pub tier: Option<String>,
    pub cards: Option<Vec<Card>>,
}

impl SubmitRequest {
    pub fn new(player_id: PlayerId, course: &str, tier: &str, cards: Vec<Card>) -> Self {
        Self {
            player_id: Some(player_id.to_string()),
            course: Some(course.to_string()),
            tier: Some(tier.to_string()),
            cards: Some(cards),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
}

/// Round as requested in the path: a number when it parses as one, the raw text otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoundNumber {
    Number(i64),
    Raw(String),
}

impl RoundNumber {
    pub fn parse(raw: &str) -> Self {
        raw.parse()
            .map(RoundNumber::Number)
            .unwrap_or_else(|_| RoundNumber::Raw(raw.to_string()))
    }
}

impl From<i64> for RoundNumber {
    fn from(round: i64) -> Self {
        RoundNumber::Number(round)
    }
}

impl fmt::Display for RoundNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundNumber::Number(round) => write!(f, "{}", round),
            RoundNumber::Raw(raw) => f.write_str(raw),
        }
    }
}

/// GET /api/round/:roundNumber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResponse {
    pub round: RoundNumber,
    pub submissions: Vec<Submission>,
}

/// GET /api/menu/rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesResponse {
    pub rules_text: String,
}

/// GET /api/test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

/// GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: i64,
    pub uptime: u64,
    pub players: usize,
}

/// Body of every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
