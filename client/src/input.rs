//! Parsing of command line card lists

use shared::{Card, Category, SharedResult};

/// Parse a comma separated list such as `Protein,Veggie,Fats/Oils`.
///
/// Names are matched case-insensitively and blank entries are skipped.
pub fn parse_cards(list: &str) -> SharedResult<Vec<Card>> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<Category>().map(Card::new))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SharedError;

    #[test]
    fn test_parse_cards_in_order() {
        let cards = parse_cards("Protein, veggie,Fats/Oils").unwrap();
        let categories: Vec<Category> = cards.iter().map(|card| card.category).collect();
        assert_eq!(categories, vec![Category::Protein, Category::Veggie, Category::FatsOils]);
    }

    #[test]
    fn test_parse_cards_keeps_duplicates() {
        let cards = parse_cards("Sweets,Sweets").unwrap();
        assert_eq!(cards, vec![Card::new(Category::Sweets), Card::new(Category::Sweets)]);
    }

    #[test]
    fn test_parse_cards_empty_list() {
        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_cards_unknown_category() {
        let error = parse_cards("Protein,Cheese").unwrap_err();
        assert_eq!(
            error,
            SharedError::UnknownCategory {
                input: "Cheese".to_string()
            }
        );
    }
}
