//! Deterministic card dealing logic.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS};
use crate::domain::{Card, Rank, Suit};

/// Generate the 40-card deck in standard order (no 8s, 9s or 10s).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Deal three cards to each of the four seats, deterministically from `seed`.
///
/// Hands keep deal order; the index of a card in its hand is what
/// `PlayCard` refers to. Remaining cards are discarded.
pub fn deal_hands(seed: u64) -> [Vec<Card>; PLAYERS] {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (seat, hand_slot) in hands.iter_mut().enumerate() {
        let start = seat * HAND_SIZE;
        *hand_slot = deck[start..start + HAND_SIZE].to_vec();
    }
    hands
}
