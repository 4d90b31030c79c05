//! Card parsing from compact tokens (e.g., "4C", "7H", "AS") and suit
//! normalization across display symbols, English names, abbreviations and
//! Portuguese names.

use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl Suit {
    /// Canonical name, also the serialized form.
    pub const fn canonical_name(&self) -> &'static str {
        match self {
            Suit::Clubs => "CLUBS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Hearts => "HEARTS",
            Suit::Spades => "SPADES",
        }
    }

    pub const fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    pub const fn letter(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub const fn portuguese_name(&self) -> &'static str {
        match self {
            Suit::Clubs => "paus",
            Suit::Diamonds => "ouros",
            Suit::Hearts => "copas",
            Suit::Spades => "espadas",
        }
    }

    /// Map any accepted representation to the canonical suit.
    ///
    /// Input is trimmed, NFKC normalized and lowercased before matching, so
    /// `" Copas "`, `"♥"`, `"h"` and `"HEARTS"` all yield [`Suit::Hearts`].
    pub fn normalize(input: &str) -> Result<Suit, DomainError> {
        let normalized: String = input.trim().nfkc().collect::<String>().to_lowercase();
        let suit = match normalized.as_str() {
            "♣" | "♧" | "clubs" | "club" | "c" | "paus" | "pau" => Suit::Clubs,
            "♦" | "♢" | "diamonds" | "diamond" | "d" | "ouros" | "ouro" => Suit::Diamonds,
            "♥" | "♡" | "hearts" | "heart" | "h" | "copas" | "copa" => Suit::Hearts,
            "♠" | "♤" | "spades" | "spade" | "s" | "espadas" | "espada" => Suit::Spades,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::ParseSuit,
                    format!("Unknown suit: {input}"),
                ))
            }
        };
        Ok(suit)
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::normalize(s)
    }
}

impl Rank {
    pub const fn token(&self) -> char {
        match self {
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
        }
    }

    fn from_token(ch: char) -> Option<Rank> {
        let rank = match ch {
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            'Q' => Rank::Queen,
            'J' => Rank::Jack,
            'K' => Rank::King,
            'A' => Rank::Ace,
            '2' => Rank::Two,
            '3' => Rank::Three,
            _ => return None,
        };
        Some(rank)
    }
}

impl Card {
    /// Compact two-character token, e.g. `"7H"`.
    pub fn token(&self) -> String {
        format!("{}{}", self.rank.token(), self.suit.letter())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err =
            || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(parse_err());
        };
        let rank = Rank::from_token(rank_ch).ok_or_else(parse_err)?;
        let suit = match suit_ch {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(parse_err()),
        };
        Ok(Card { suit, rank })
    }
}
