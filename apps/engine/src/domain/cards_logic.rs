//! Card strength for Truco Mineiro: fixed manilhas, then 3 > 2 > A > K > J > Q > 7 > 6 > 5 > 4.

use super::cards_types::{Card, Rank, Slot, Suit};

/// Strength of a face-down (folded) card. Loses every comparison.
pub const FOLD_STRENGTH: i8 = -1;
/// Strength of an unplayed slot.
pub const EMPTY_STRENGTH: i8 = 0;

/// 4♣, the strongest card.
pub const ZAP: Card = Card::new(Rank::Four, Suit::Clubs);
/// 7♥.
pub const COPAS: Card = Card::new(Rank::Seven, Suit::Hearts);
/// A♠.
pub const ESPADILHA: Card = Card::new(Rank::Ace, Suit::Spades);
/// 7♦.
pub const PICA_FUMO: Card = Card::new(Rank::Seven, Suit::Diamonds);

/// Ranking used for round comparisons. Always >= 1 for a real card.
pub fn card_strength(card: Card) -> i8 {
    if card == ZAP {
        return 14;
    }
    if card == COPAS {
        return 13;
    }
    if card == ESPADILHA {
        return 12;
    }
    if card == PICA_FUMO {
        return 11;
    }
    match card.rank {
        Rank::Three => 10,
        Rank::Two => 9,
        Rank::Ace => 8,
        Rank::King => 7,
        Rank::Jack => 6,
        Rank::Queen => 5,
        Rank::Seven => 4,
        Rank::Six => 3,
        Rank::Five => 2,
        Rank::Four => 1,
    }
}

impl Card {
    pub fn strength(&self) -> i8 {
        card_strength(*self)
    }
}

impl Slot {
    pub fn strength(&self) -> i8 {
        match self {
            Slot::Empty => EMPTY_STRENGTH,
            Slot::Folded => FOLD_STRENGTH,
            Slot::Played(card) => card.strength(),
        }
    }
}
