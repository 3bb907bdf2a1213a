//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult};

static SERVICE_ID: OnceLock<ServiceId> = OnceLock::new();

/// Identifier for the running binary, attached to every log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceId {
    Server,
    Client,
}

impl ServiceId {
    /// Initialize the global service ID for the game server
    pub fn init_server() -> &'static ServiceId {
        SERVICE_ID.get_or_init(|| ServiceId::Server)
    }

    /// Initialize the global service ID for the CLI client
    pub fn init_client() -> &'static ServiceId {
        SERVICE_ID.get_or_init(|| ServiceId::Client)
    }

    /// Get the global service ID, falling back to `Server` when no binary set it
    pub fn current() -> &'static ServiceId {
        SERVICE_ID.get_or_init(|| ServiceId::Server)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceId::Server => write!(f, "server"),
            ServiceId::Client => write!(f, "client"),
        }
    }
}

/// Unique identifier handed to a player on join
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> SharedResult<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidPlayerId { input: s.to_string() })
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ingredient category printed on a card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Protein,
    Veggie,
    Carb,
    #[serde(rename = "Fats/Oils")]
    FatsOils,
    Fruits,
    Sauces,
    Sweets,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Protein,
        Category::Veggie,
        Category::Carb,
        Category::FatsOils,
        Category::Fruits,
        Category::Sauces,
        Category::Sweets,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Protein => "Protein",
            Category::Veggie => "Veggie",
            Category::Carb => "Carb",
            Category::FatsOils => "Fats/Oils",
            Category::Fruits => "Fruits",
            Category::Sauces => "Sauces",
            Category::Sweets => "Sweets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SharedError::UnknownCategory { input: s.to_string() })
    }
}

/// A single ingredient card. Cards carry no identity beyond their category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub category: Category,
}

impl Card {
    pub fn new(category: Category) -> Self {
        Self { category }
    }
}

impl From<Category> for Card {
    fn from(category: Category) -> Self {
        Self::new(category)
    }
}

/// Per-category card tally, also used for recipe requirements
pub type CategoryCounts = BTreeMap<Category, u32>;

/// Tally how many cards of each category appear in `cards`
pub fn count_categories(cards: &[Card]) -> CategoryCounts {
    let mut counts = CategoryCounts::new();
    for card in cards {
        *counts.entry(card.category).or_insert(0) += 1;
    }
    counts
}

/// Menu course
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Course {
    Appetizer,
    Entree,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Appetizer, Course::Entree, Course::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Appetizer => "Appetizer",
            Course::Entree => "Entree",
            Course::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Course::ALL
            .into_iter()
            .find(|course| course.as_str() == s)
            .ok_or_else(|| SharedError::UnknownCourse { input: s.to_string() })
    }
}

/// Recipe difficulty within a course
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TierName {
    Simple,
    Intermediate,
    Complex,
}

impl TierName {
    pub const ALL: [TierName; 3] = [TierName::Simple, TierName::Intermediate, TierName::Complex];

    pub fn as_str(&self) -> &'static str {
        match self {
            TierName::Simple => "Simple",
            TierName::Intermediate => "Intermediate",
            TierName::Complex => "Complex",
        }
    }
}

impl fmt::Display for TierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TierName {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TierName::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| SharedError::UnknownTier { input: s.to_string() })
    }
}

/// A recipe: minimum ingredient counts and the price it sells for
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    #[serde(rename = "tier")]
    pub name: TierName,
    pub ingredients_required: CategoryCounts,
    pub sale_price: u32,
}

impl Tier {
    pub fn new(name: TierName, ingredients_required: &[(Category, u32)], sale_price: u32) -> Self {
        Self {
            name,
            ingredients_required: ingredients_required.iter().copied().collect(),
            sale_price,
        }
    }
}

/// Cards a player committed toward one course/tier recipe
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub player_id: PlayerId,
    pub course: Course,
    pub tier: TierName,
    pub cards: Vec<Card>,
}
