//! Immutable records of what a command did to a game.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use ulid::Ulid;

use crate::domain::state::{
    GameId, GameState, HandEndReason, RoundOutcome, Seat, Team,
};
use crate::domain::truco::Stake;
use crate::domain::Card;

pub const EVENT_SCHEMA_VERSION: u16 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: Ulid,
    pub game_id: GameId,
    #[serde(with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,
    pub schema_version: u16,
    /// Seat whose command caused the event; `None` for engine-driven events.
    pub actor: Option<Seat>,
    pub payload: EventPayload,
}

impl DomainEvent {
    pub fn new(game_id: GameId, actor: Option<Seat>, payload: EventPayload) -> Self {
        Self {
            event_id: Ulid::new(),
            game_id,
            occurred_at: OffsetDateTime::now_utc(),
            schema_version: EVENT_SCHEMA_VERSION,
            actor,
            payload,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    GameStarted {
        player_names: Vec<String>,
        dealer: Seat,
        winning_score: u16,
    },
    HandStarted {
        hand_no: u32,
        dealer: Seat,
        first_seat: Seat,
        stake: Stake,
    },
    CardPlayed {
        hand_no: u32,
        round_no: u8,
        seat: Seat,
        /// `None` when played face down.
        card: Option<Card>,
        face_down: bool,
    },
    RoundResolved {
        hand_no: u32,
        round_no: u8,
        outcome: RoundOutcome,
    },
    TrucoCalled {
        hand_no: u32,
        seat: Seat,
        team: Team,
        /// Stake locked once the call is made (moves only on a counter-raise).
        locked: Stake,
        requested: Stake,
        counter_raise: bool,
    },
    TrucoAccepted {
        hand_no: u32,
        seat: Seat,
        stake: Stake,
    },
    TrucoSurrendered {
        hand_no: u32,
        seat: Seat,
        stake: Stake,
        winner: Team,
        snapshot: Box<GameState>,
    },
    HandSurrendered {
        hand_no: u32,
        seat: Seat,
        stake: Stake,
        winner: Team,
        snapshot: Box<GameState>,
    },
    HandResolved {
        hand_no: u32,
        winner: Option<Team>,
        points: u8,
        reason: HandEndReason,
        scores: [u16; 2],
    },
    GameWon {
        winner: Team,
        scores: [u16; 2],
        hands_played: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    GameStarted,
    HandStarted,
    CardPlayed,
    RoundResolved,
    TrucoCalled,
    TrucoAccepted,
    TrucoSurrendered,
    HandSurrendered,
    HandResolved,
    GameWon,
}

impl EventKind {
    pub const ALL: [EventKind; 10] = [
        EventKind::GameStarted,
        EventKind::HandStarted,
        EventKind::CardPlayed,
        EventKind::RoundResolved,
        EventKind::TrucoCalled,
        EventKind::TrucoAccepted,
        EventKind::TrucoSurrendered,
        EventKind::HandSurrendered,
        EventKind::HandResolved,
        EventKind::GameWon,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GameStarted => "GAME_STARTED",
            Self::HandStarted => "HAND_STARTED",
            Self::CardPlayed => "CARD_PLAYED",
            Self::RoundResolved => "ROUND_RESOLVED",
            Self::TrucoCalled => "TRUCO_CALLED",
            Self::TrucoAccepted => "TRUCO_ACCEPTED",
            Self::TrucoSurrendered => "TRUCO_SURRENDERED",
            Self::HandSurrendered => "HAND_SURRENDERED",
            Self::HandResolved => "HAND_RESOLVED",
            Self::GameWon => "GAME_WON",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::GameStarted { .. } => EventKind::GameStarted,
            EventPayload::HandStarted { .. } => EventKind::HandStarted,
            EventPayload::CardPlayed { .. } => EventKind::CardPlayed,
            EventPayload::RoundResolved { .. } => EventKind::RoundResolved,
            EventPayload::TrucoCalled { .. } => EventKind::TrucoCalled,
            EventPayload::TrucoAccepted { .. } => EventKind::TrucoAccepted,
            EventPayload::TrucoSurrendered { .. } => EventKind::TrucoSurrendered,
            EventPayload::HandSurrendered { .. } => EventKind::HandSurrendered,
            EventPayload::HandResolved { .. } => EventKind::HandResolved,
            EventPayload::GameWon { .. } => EventKind::GameWon,
        }
    }
}
