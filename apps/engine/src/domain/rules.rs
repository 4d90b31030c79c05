use serde::{Deserialize, Serialize};

pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 3;
pub const ROUNDS_PER_HAND: u8 = 3;
pub const DECK_SIZE: usize = 40;
pub const DEFAULT_WINNING_SCORE: u16 = 12;
/// Seat 3 deals first so the human at seat 0 acts first.
pub const DEFAULT_INITIAL_DEALER: u8 = 3;

/// How a hand whose three rounds all tie is decided.
///
/// Every other tie pattern follows the conventional rule: the first decisive
/// round wins, and a tie after a decided round goes to the earlier winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakRule {
    /// Three tied rounds: the hand is drawn and nobody scores.
    #[default]
    FirstDecisiveRound,
    /// Three tied rounds: the team of the hand's first seat wins.
    ElderHand,
}

impl TieBreakRule {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first_decisive_round" => Some(Self::FirstDecisiveRound),
            "elder_hand" => Some(Self::ElderHand),
            _ => None,
        }
    }
}
