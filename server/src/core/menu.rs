//! Menu catalog: courses, their tiers, and the rules text
//!
//! Pure data with no I/O dependencies

use shared::{Category, Course, CurrentMenu, FullMenu, Tier, TierName};

use crate::error::{ServerError, ServerResult};
use crate::traits::RandomSource;

pub const RULES_TEXT: &str = "
Kitchen Impossible Game Rules

1. Each round, the dealer deals 5 ingredient cards per player.
2. Players must contribute 1 Appetizer, 1 Entree, and 1 Dessert.
3. Contribution must not exceed cards in hand.
4. Courses have Simple, Intermediate, and Complex tiers, each with ingredient requirements and sale prices.
5. After all players submit, dice are rolled to calculate revenue.
6. Leftover ingredients are counted at the end for food waste.
7. Game ends when target profit or max rounds are reached.
8. Players may negotiate card contributions to maximize profits.
";

/// Static lookup of course to ordered tiers
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    courses: FullMenu,
}

impl MenuCatalog {
    /// The standard Kitchen Impossible menu
    pub fn standard() -> Self {
        use Category::*;

        let mut courses = FullMenu::new();
        courses.insert(
            Course::Appetizer,
            vec![
                Tier::new(TierName::Simple, &[(Protein, 1), (Veggie, 1)], 5),
                Tier::new(TierName::Intermediate, &[(Protein, 1), (Veggie, 1), (Sauces, 1)], 10),
                Tier::new(
                    TierName::Complex,
                    &[(Protein, 2), (Veggie, 1), (Carb, 1), (FatsOils, 1), (Sauces, 1)],
                    15,
                ),
            ],
        );
        courses.insert(
            Course::Entree,
            vec![
                Tier::new(TierName::Simple, &[(Protein, 2), (Carb, 1)], 10),
                Tier::new(TierName::Intermediate, &[(Protein, 2), (Carb, 1), (Veggie, 1)], 15),
                Tier::new(
                    TierName::Complex,
                    &[(Protein, 3), (Carb, 2), (Veggie, 1), (FatsOils, 1)],
                    25,
                ),
            ],
        );
        courses.insert(
            Course::Dessert,
            vec![
                Tier::new(TierName::Simple, &[(Sweets, 2)], 5),
                Tier::new(TierName::Intermediate, &[(Sweets, 2), (Fruits, 1)], 10),
                Tier::new(TierName::Complex, &[(Sweets, 3), (Fruits, 2), (Sauces, 1)], 20),
            ],
        );

        Self { courses }
    }

    /// Build a catalog from arbitrary course data
    pub fn from_courses(courses: FullMenu) -> Self {
        Self { courses }
    }

    /// Ordered tiers for `course`
    pub fn tiers_for(&self, course: Course) -> ServerResult<&[Tier]> {
        self.courses
            .get(&course)
            .map(Vec::as_slice)
            .ok_or_else(|| ServerError::InvalidCourse { course: course.to_string() })
    }

    /// Resolve a course/tier pair given by name
    pub fn tier(&self, course: &str, tier: &str) -> ServerResult<&Tier> {
        let parsed_course: Course = course
            .parse()
            .map_err(|_| ServerError::InvalidCourse { course: course.to_string() })?;
        let invalid_tier = || ServerError::InvalidTier {
            course: course.to_string(),
            tier: tier.to_string(),
        };
        let parsed_tier: TierName = tier.parse().map_err(|_| invalid_tier())?;

        self.tiers_for(parsed_course)?
            .iter()
            .find(|candidate| candidate.name == parsed_tier)
            .ok_or_else(invalid_tier)
    }

    /// Pick one tier per course, uniformly and independently.
    ///
    /// Nothing is remembered between calls; every fetch is a fresh draw.
    pub fn pick_random_tier_per_course<R>(&self, rng: &mut R) -> CurrentMenu
    where
        R: RandomSource + ?Sized,
    {
        self.courses
            .iter()
            .filter(|(_, tiers)| !tiers.is_empty())
            .map(|(course, tiers)| (*course, tiers[rng.index(tiers.len())].clone()))
            .collect()
    }

    /// Whole catalog
    pub fn full(&self) -> &FullMenu {
        &self.courses
    }

    pub fn rules_text(&self) -> &'static str {
        RULES_TEXT
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
