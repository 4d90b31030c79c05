//! Player-issued commands. Every command names its game and acting seat.

use serde::{Deserialize, Serialize};

use crate::domain::state::{GameId, Seat};
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Seat 0 opens a game (or a fresh one over a finished game).
    StartGame {
        game_id: GameId,
        #[serde(default)]
        player_name: Option<String>,
    },
    PlayCard {
        game_id: GameId,
        seat: Seat,
        card_index: usize,
        /// When present, must match the card at `card_index`.
        #[serde(default)]
        expected: Option<Card>,
        /// Play the card covered; only from round 2 on.
        #[serde(default)]
        face_down: bool,
    },
    CallTrucoOrRaise {
        game_id: GameId,
        seat: Seat,
    },
    AcceptTruco {
        game_id: GameId,
        seat: Seat,
    },
    SurrenderTruco {
        game_id: GameId,
        seat: Seat,
    },
    SurrenderHand {
        game_id: GameId,
        seat: Seat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandKind {
    StartGame,
    PlayCard,
    CallTrucoOrRaise,
    AcceptTruco,
    SurrenderTruco,
    SurrenderHand,
}

impl CommandKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StartGame => "START_GAME",
            Self::PlayCard => "PLAY_CARD",
            Self::CallTrucoOrRaise => "CALL_TRUCO_OR_RAISE",
            Self::AcceptTruco => "ACCEPT_TRUCO",
            Self::SurrenderTruco => "SURRENDER_TRUCO",
            Self::SurrenderHand => "SURRENDER_HAND",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Command {
    pub fn start_game(game_id: GameId, player_name: Option<&str>) -> Self {
        Command::StartGame {
            game_id,
            player_name: player_name.map(str::to_owned),
        }
    }

    pub fn play_card(game_id: GameId, seat: Seat, card_index: usize) -> Self {
        Command::PlayCard {
            game_id,
            seat,
            card_index,
            expected: None,
            face_down: false,
        }
    }

    pub fn play_face_down(game_id: GameId, seat: Seat, card_index: usize) -> Self {
        Command::PlayCard {
            game_id,
            seat,
            card_index,
            expected: None,
            face_down: true,
        }
    }

    pub fn call_truco(game_id: GameId, seat: Seat) -> Self {
        Command::CallTrucoOrRaise { game_id, seat }
    }

    pub fn accept_truco(game_id: GameId, seat: Seat) -> Self {
        Command::AcceptTruco { game_id, seat }
    }

    pub fn surrender_truco(game_id: GameId, seat: Seat) -> Self {
        Command::SurrenderTruco { game_id, seat }
    }

    pub fn surrender_hand(game_id: GameId, seat: Seat) -> Self {
        Command::SurrenderHand { game_id, seat }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::StartGame { .. } => CommandKind::StartGame,
            Command::PlayCard { .. } => CommandKind::PlayCard,
            Command::CallTrucoOrRaise { .. } => CommandKind::CallTrucoOrRaise,
            Command::AcceptTruco { .. } => CommandKind::AcceptTruco,
            Command::SurrenderTruco { .. } => CommandKind::SurrenderTruco,
            Command::SurrenderHand { .. } => CommandKind::SurrenderHand,
        }
    }

    pub fn game_id(&self) -> GameId {
        match self {
            Command::StartGame { game_id, .. }
            | Command::PlayCard { game_id, .. }
            | Command::CallTrucoOrRaise { game_id, .. }
            | Command::AcceptTruco { game_id, .. }
            | Command::SurrenderTruco { game_id, .. }
            | Command::SurrenderHand { game_id, .. } => *game_id,
        }
    }

    /// Acting seat. StartGame is always issued by the human at seat 0.
    pub fn seat(&self) -> Seat {
        match self {
            Command::StartGame { .. } => 0,
            Command::PlayCard { seat, .. }
            | Command::CallTrucoOrRaise { seat, .. }
            | Command::AcceptTruco { seat, .. }
            | Command::SurrenderTruco { seat, .. }
            | Command::SurrenderHand { seat, .. } => *seat,
        }
    }

    /// Attach the card the caller believes sits at `card_index`.
    pub fn with_expected(mut self, card: Card) -> Self {
        if let Command::PlayCard { expected, .. } = &mut self {
            *expected = Some(card);
        }
        self
    }
}
