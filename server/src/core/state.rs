//! Game state store: roster, deck, round counter and submissions
//!
//! Pure business logic with no I/O dependencies

use std::collections::HashMap;

use shared::{Card, CurrentMenu, PlayerId, Submission, SubmitRequest};

use crate::config::GameConfig;
use crate::core::deck::Deck;
use crate::core::menu::MenuCatalog;
use crate::core::validator::{self, ValidatedSubmission};
use crate::error::{ServerError, ServerResult};
use crate::traits::RandomSource;

/// A joined player. Players are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    /// Not updated by any rule yet
    pub score: u32,
}

/// Central game state containing all mutable business data
pub struct GameState<R> {
    players: HashMap<PlayerId, Player>,
    deck: Deck,
    round: u32,
    submissions: Vec<Submission>,
    config: GameConfig,
    rng: R,
}

impl<R> GameState<R> {
    pub fn player(&self, id: &PlayerId) -> ServerResult<&Player> {
        self.players
            .get(id)
            .ok_or_else(|| ServerError::PlayerNotFound { player_id: id.to_string() })
    }

    /// Look up a player by the raw id a client sent; malformed ids are simply unknown
    pub fn find_player(&self, raw_id: &str) -> ServerResult<&Player> {
        let id = PlayerId::from_string(raw_id)
            .map_err(|_| ServerError::PlayerNotFound { player_id: raw_id.to_string() })?;
        self.player(&id)
    }

    /// Append a submission. Validation is the caller's job and nothing is ever removed.
    pub fn record_submission(&mut self, submission: Submission) {
        self.submissions.push(submission);
    }

    /// Submissions for a round.
    ///
    /// The round number is echoed back but does not filter: every stored
    /// submission is returned whatever round is asked for.
    pub fn list_submissions<T>(&self, round: T) -> (T, &[Submission]) {
        (round, &self.submissions)
    }

    /// Rounds never advance
    pub fn current_round(&self) -> u32 {
        self.round
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Apply a validated submission: take the cards out of the hand, then record it
    pub fn commit(&mut self, validated: ValidatedSubmission) -> Submission {
        if let Some(player) = self.players.get_mut(&validated.player_id) {
            validator::remove_submitted(&mut player.hand, &validated.counts);
        }

        let submission = Submission {
            player_id: validated.player_id,
            course: validated.course,
            tier: validated.tier,
            cards: validated.cards,
        };
        self.record_submission(submission.clone());
        submission
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a state with an empty roster; the deck is filled on first deal
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            players: HashMap::new(),
            deck: Deck::new(config.copies_per_category),
            round: 1,
            submissions: Vec::new(),
            config,
            rng,
        }
    }

    /// Register a player under a fresh id and deal them a hand
    pub fn add_player(&mut self, name: &str) -> ServerResult<(PlayerId, Vec<Card>)> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServerError::invalid_input("name required"));
        }

        let id = PlayerId::new();
        let hand = self.deck.deal_hand(self.config.hand_size, &mut self.rng);
        self.players.insert(
            id,
            Player {
                id,
                name: name.to_string(),
                hand: hand.clone(),
                score: 0,
            },
        );

        Ok((id, hand))
    }

    /// Validate then commit in one step; a rejected request changes nothing
    pub fn submit(&mut self, catalog: &MenuCatalog, request: &SubmitRequest) -> ServerResult<Submission> {
        let validated = validator::validate(self, catalog, request)?;
        Ok(self.commit(validated))
    }

    /// Fresh random tier per course, drawn from this state's random source
    pub fn current_menu(&mut self, catalog: &MenuCatalog) -> CurrentMenu {
        catalog.pick_random_tier_per_course(&mut self.rng)
    }
}
