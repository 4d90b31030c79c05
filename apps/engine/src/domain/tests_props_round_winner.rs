//! Property-based tests for round resolution.

use engine_test_support::proptest_prelude::proptest_config;
use proptest::prelude::*;

use crate::domain::cards_logic::{EMPTY_STRENGTH, FOLD_STRENGTH};
use crate::domain::rounds::resolve_round;
use crate::domain::state::{Round, RoundOutcome, Team};
use crate::domain::test_gens;
use crate::domain::Slot;

/// Reference resolution: strictly highest strength wins, otherwise a tie.
fn oracle(slots: &[Slot; 4]) -> RoundOutcome {
    let best = slots.iter().map(Slot::strength).max().unwrap_or(EMPTY_STRENGTH);
    let top: Vec<usize> = (0..4).filter(|&s| slots[s].strength() == best).collect();
    if top.len() == 1 {
        let seat = top[0] as u8;
        RoundOutcome::Won {
            seat,
            team: Team::of_seat(seat),
        }
    } else {
        RoundOutcome::Tied
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_round_winner_matches_oracle(slots in test_gens::complete_round(), leader in 0u8..4) {
        let mut round = Round::new(1, leader);
        round.slots = slots;
        prop_assert_eq!(resolve_round(&round), oracle(&slots));
    }

    /// The winner's slot is never folded unless every slot is folded (which ties).
    #[test]
    fn prop_winner_played_face_up(slots in test_gens::complete_round()) {
        let mut round = Round::new(2, 0);
        round.slots = slots;
        if let RoundOutcome::Won { seat, .. } = resolve_round(&round) {
            prop_assert!(matches!(slots[seat as usize], Slot::Played(_)));
        }
    }

    #[test]
    fn prop_sentinels_order_below_cards(card in test_gens::card()) {
        prop_assert!(FOLD_STRENGTH < EMPTY_STRENGTH);
        prop_assert!(EMPTY_STRENGTH < card.strength());
        prop_assert!(Slot::Folded.strength() < Slot::Played(card).strength());
    }
}
