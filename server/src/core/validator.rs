//! Submission validation
//!
//! Validation only reads the game state. A submission that passes is turned
//! into a [`ValidatedSubmission`], which is the only thing
//! [`GameState::commit`](crate::core::GameState::commit) accepts.

use shared::{Card, CategoryCounts, Course, PlayerId, SubmitRequest, Tier, TierName, count_categories};

use crate::core::{GameState, MenuCatalog};
use crate::error::{ServerError, ServerResult};

/// A submission that passed every check and may be committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub player_id: PlayerId,
    pub course: Course,
    pub tier: TierName,
    pub cards: Vec<Card>,
    pub counts: CategoryCounts,
}

/// Check a submit request against the player's hand and the chosen recipe.
///
/// Order matters: hand sufficiency is checked before the course and tier are
/// resolved, so an unknown course with cards the player lacks reports the
/// missing cards.
pub fn validate<R>(
    state: &GameState<R>,
    catalog: &MenuCatalog,
    request: &SubmitRequest,
) -> ServerResult<ValidatedSubmission> {
    fn present(field: &Option<String>) -> Option<&str> {
        field.as_deref().filter(|value| !value.is_empty())
    }

    let (Some(player_id), Some(course), Some(tier), Some(cards)) = (
        present(&request.player_id),
        present(&request.course),
        present(&request.tier),
        request.cards.as_ref(),
    ) else {
        return Err(ServerError::invalid_input("fields required"));
    };

    let player = state.find_player(player_id)?;
    let counts = check_hand_sufficiency(&player.hand, cards)?;

    let recipe = catalog.tier(course, tier)?;
    check_recipe(recipe, cards)?;

    Ok(ValidatedSubmission {
        player_id: player.id,
        course: course.parse()?,
        tier: recipe.name,
        cards: cards.clone(),
        counts,
    })
}

/// Every submitted category must be held at least as many times as submitted.
/// Categories not submitted are not looked at.
pub fn check_hand_sufficiency(hand: &[Card], cards: &[Card]) -> ServerResult<CategoryCounts> {
    let hand_counts = count_categories(hand);
    let submit_counts = count_categories(cards);

    for (category, submitted) in &submit_counts {
        let held = hand_counts.get(category).copied().unwrap_or(0);
        if held < *submitted {
            return Err(ServerError::InsufficientCards { category: *category });
        }
    }
    Ok(submit_counts)
}

/// Every category the recipe lists must be met; extra cards are allowed
pub fn check_recipe(recipe: &Tier, cards: &[Card]) -> ServerResult<()> {
    let counts = count_categories(cards);

    for (category, required) in &recipe.ingredients_required {
        let provided = counts.get(category).copied().unwrap_or(0);
        if provided < *required {
            return Err(ServerError::InsufficientIngredients {
                category: *category,
                required: *required,
                provided,
            });
        }
    }
    Ok(())
}

/// Drop exactly `submitted` cards per category, keeping the order of the rest
pub fn remove_submitted(hand: &mut Vec<Card>, submitted: &CategoryCounts) {
    let mut to_remove = submitted.clone();
    hand.retain(|card| match to_remove.get_mut(&card.category) {
        Some(left) if *left > 0 => {
            *left -= 1;
            false
        }
        _ => true,
    });
}
