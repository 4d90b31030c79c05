// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::{Card, Rank, Slot, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// `n` distinct cards from the 40-card deck.
pub fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck()).prop_shuffle().prop_map(move |deck| deck[..n].to_vec())
}

/// A complete round: four distinct cards, some of which may be played face down.
pub fn complete_round() -> impl Strategy<Value = [Slot; 4]> {
    (distinct_cards(4), prop::array::uniform4(prop::bool::weighted(0.2))).prop_map(
        |(cards, folded)| {
            let mut slots = [Slot::Empty; 4];
            for seat in 0..4 {
                slots[seat] = if folded[seat] {
                    Slot::Folded
                } else {
                    Slot::Played(cards[seat])
                };
            }
            slots
        },
    )
}

/// Any accepted spelling of a suit, with random case and padding.
pub fn suit_spelling() -> impl Strategy<Value = (Suit, String)> {
    let spellings = prop_oneof![
        Just((Suit::Hearts, "♥")),
        Just((Suit::Hearts, "♡")),
        Just((Suit::Hearts, "hearts")),
        Just((Suit::Hearts, "h")),
        Just((Suit::Hearts, "copas")),
        Just((Suit::Diamonds, "♦")),
        Just((Suit::Diamonds, "diamonds")),
        Just((Suit::Diamonds, "d")),
        Just((Suit::Diamonds, "ouros")),
        Just((Suit::Clubs, "♣")),
        Just((Suit::Clubs, "clubs")),
        Just((Suit::Clubs, "c")),
        Just((Suit::Clubs, "paus")),
        Just((Suit::Spades, "♠")),
        Just((Suit::Spades, "spades")),
        Just((Suit::Spades, "s")),
        Just((Suit::Spades, "espadas")),
    ];
    (spellings, any::<bool>(), " {0,2}", " {0,2}").prop_map(|((suit, word), upper, pre, post)| {
        let word = if upper {
            word.to_uppercase()
        } else {
            word.to_string()
        };
        (suit, format!("{pre}{word}{post}"))
    })
}
