//! Property-based tests for suit normalization and card tokens.

use engine_test_support::proptest_prelude::proptest_config;
use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::{Card, Suit};

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_every_spelling_normalizes(spelling in test_gens::suit_spelling()) {
        let (expected, input) = spelling;
        prop_assert_eq!(Suit::normalize(&input).unwrap(), expected);
    }

    /// Normalizing the canonical output again yields the same suit.
    #[test]
    fn prop_normalization_is_idempotent(spelling in test_gens::suit_spelling()) {
        let (_, input) = spelling;
        let once = Suit::normalize(&input).unwrap();
        let twice = Suit::normalize(once.canonical_name()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_card_token_round_trips(card in test_gens::card()) {
        let token = card.token();
        prop_assert_eq!(token.len(), 2);
        prop_assert_eq!(token.parse::<Card>().unwrap(), card);
    }
}
