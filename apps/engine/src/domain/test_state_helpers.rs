//! Test-only helpers for building and driving game states.

use crate::config::EngineConfig;
use crate::domain::commands::Command;
use crate::domain::machine::{process_command, ExecutionContext, Transition};
use crate::domain::rules::{TieBreakRule, PLAYERS};
use crate::domain::state::{GameId, GameState, Seat};
use crate::domain::Card;
use crate::errors::domain::DomainError;

pub const TEST_GAME: GameId = 100;

pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    tokens
        .iter()
        .map(|t| t.parse::<Card>().expect("hardcoded valid card token"))
        .collect()
}

/// Fresh game (dealer 3, seat 0 to act) with the given hands in place of the dealt ones.
pub fn game_with_hands(hands: [[&str; 3]; PLAYERS], tie_break: TieBreakRule) -> GameState {
    let mut state = GameState::new(TEST_GAME, 0, "Tester", 3, 12, tie_break);
    replace_hands(&mut state, hands);
    state
}

pub fn replace_hands(state: &mut GameState, hands: [[&str; 3]; PLAYERS]) {
    for (player, tokens) in state.players.iter_mut().zip(hands) {
        player.hand = parse_cards(&tokens).into_iter().map(Some).collect();
    }
}

pub fn apply(state: Option<&GameState>, cmd: Command) -> Result<Transition, DomainError> {
    let config = EngineConfig::default();
    process_command(state, &cmd, &ExecutionContext::new(&config, 0))
}

/// Apply `cmd`, panicking on rejection.
pub fn step(state: &GameState, cmd: Command) -> Transition {
    apply(Some(state), cmd.clone()).unwrap_or_else(|e| panic!("{cmd:?} rejected: {e}"))
}

/// Play the card with `token` from `seat`'s hand.
pub fn play(state: &GameState, seat: Seat, token: &str) -> Transition {
    let card: Card = token.parse().expect("hardcoded valid card token");
    let index = state.players[seat as usize]
        .hand
        .iter()
        .position(|c| *c == Some(card))
        .unwrap_or_else(|| panic!("seat {seat} does not hold {token}"));
    step(
        state,
        Command::play_card(state.game_id, seat, index).with_expected(card),
    )
}

/// Play every token in order, each from the seat whose turn it is.
pub fn play_all(state: &GameState, tokens: &[&str]) -> GameState {
    let mut current = state.clone();
    for token in tokens {
        let seat = current.turn.expect("a seat must be on turn");
        current = play(&current, seat, token).state;
    }
    current
}
