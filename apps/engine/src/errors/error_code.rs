//! Error codes for the Truco engine.
//!
//! Every rejection and internal failure maps to exactly one code. Add new
//! codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and are the strings callers
//! surface to clients.

use core::fmt;

/// Centralized error codes for the Truco engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Command rejections
    /// Command not legal in the current phase
    InvalidCommandForState,
    /// Declared seat is not the one expected to act or respond
    WrongActor,
    /// Command issued against a finished game
    GameAlreadyTerminal,
    /// Card index out of range or already played
    InvalidCardSelection,
    /// Raise beyond the maximum stake or out of alternation
    IllegalStakeEscalation,
    /// Seat outside 0..=3
    InvalidSeat,

    // Parsing
    /// Card token could not be parsed
    ParseCard,
    /// Suit representation could not be normalized
    ParseSuit,

    // Resource Not Found
    /// Referenced game id has no state
    UnknownGame,

    // System Errors
    /// Internal invariant broken
    DataCorruption,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// All codes, in declaration order.
    pub const ALL: [ErrorCode; 11] = [
        Self::InvalidCommandForState,
        Self::WrongActor,
        Self::GameAlreadyTerminal,
        Self::InvalidCardSelection,
        Self::IllegalStakeEscalation,
        Self::InvalidSeat,
        Self::ParseCard,
        Self::ParseSuit,
        Self::UnknownGame,
        Self::DataCorruption,
        Self::ConfigError,
    ];

    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCommandForState => "INVALID_COMMAND_FOR_STATE",
            Self::WrongActor => "WRONG_ACTOR",
            Self::GameAlreadyTerminal => "GAME_ALREADY_TERMINAL",
            Self::InvalidCardSelection => "INVALID_CARD_SELECTION",
            Self::IllegalStakeEscalation => "ILLEGAL_STAKE_ESCALATION",
            Self::InvalidSeat => "INVALID_SEAT",

            Self::ParseCard => "PARSE_CARD",
            Self::ParseSuit => "PARSE_SUIT",

            Self::UnknownGame => "UNKNOWN_GAME",

            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
