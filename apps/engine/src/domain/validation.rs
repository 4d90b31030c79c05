//! Command legality. Pure: never touches state.

use crate::domain::commands::Command;
use crate::domain::rounds::check_play;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::check_hand_surrender;
use crate::domain::state::GameState;
use crate::domain::truco::{check_call, check_response};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Is `cmd` legal against `state`? `None` means no game exists for the id.
///
/// Checks run in order: game exists, game not finished, seat in range, then
/// the per-command rules.
pub fn validate_command(state: Option<&GameState>, cmd: &Command) -> Result<(), DomainError> {
    let game_id = cmd.game_id();

    if let Command::StartGame { .. } = cmd {
        return match state {
            Some(existing) if !existing.terminal => Err(DomainError::validation(
                ValidationKind::InvalidCommandForState,
                format!("Game {game_id} is already in progress"),
            )),
            _ => Ok(()),
        };
    }

    let state = state.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    })?;

    if state.game_id != game_id {
        return Err(DomainError::corruption(format!(
            "State for game {} looked up for command on game {game_id}",
            state.game_id
        )));
    }

    if state.terminal {
        return Err(DomainError::validation(
            ValidationKind::GameAlreadyTerminal,
            format!("Game {game_id} has already finished"),
        ));
    }

    let seat = cmd.seat();
    if seat as usize >= PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("Seat {seat} out of range (0..{PLAYERS})"),
        ));
    }

    match cmd {
        Command::StartGame { .. } => Ok(()),
        Command::PlayCard {
            card_index,
            expected,
            face_down,
            ..
        } => check_play(state, seat, *card_index, *expected, *face_down).map(|_| ()),
        Command::CallTrucoOrRaise { .. } => check_call(state, seat).map(|_| ()),
        Command::AcceptTruco { .. } | Command::SurrenderTruco { .. } => {
            check_response(state, seat).map(|_| ())
        }
        Command::SurrenderHand { .. } => check_hand_surrender(state, seat),
    }
}
