#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use truco_engine::{
    Command, CommandOutcome, EngineConfig, EventPublisher, GameFlowService, GameId, GameState,
    ScoreboardHandler, Stake, TracingEventHandler,
};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

/// Service with the built-in handlers registered and a fixed dealing seed.
pub fn service_with_scoreboard(seed: u64) -> (GameFlowService, Arc<ScoreboardHandler>) {
    let publisher = Arc::new(EventPublisher::new());
    let scoreboard = Arc::new(ScoreboardHandler::new());
    publisher.register(scoreboard.clone());
    publisher.register(Arc::new(TracingEventHandler));
    let service =
        GameFlowService::new(EngineConfig::default(), publisher).with_fixed_seed(seed);
    (service, scoreboard)
}

/// Next command of a simple scripted policy: the seat to act calls truco at
/// the start of every odd hand, the other team always accepts, and otherwise
/// the seat on turn plays its first remaining card.
pub fn scripted_command(state: &GameState) -> Command {
    let game_id = state.game_id;
    if let Some(pending) = state.hand.pending {
        let responder = pending.responding_team().seats()[0];
        return Command::accept_truco(game_id, responder);
    }

    let seat = state.turn.expect("live game must have a seat on turn");
    let opening = state.hand.rounds.len() == 1 && state.hand.rounds[0].plays_made() == 0;
    if opening && state.hand.number % 2 == 1 && state.hand.stake == Stake::Base {
        return Command::call_truco(game_id, seat);
    }

    let (index, card) = state.players[seat as usize]
        .remaining_cards()
        .next()
        .expect("seat on turn must hold a card");
    Command::play_card(game_id, seat, index).with_expected(card)
}

/// Drive a started game to its end; returns every committed outcome.
pub fn play_to_end(service: &GameFlowService, game_id: GameId) -> Vec<CommandOutcome> {
    let mut outcomes = Vec::new();
    for _ in 0..5_000 {
        let state = service
            .get_game_state(game_id)
            .expect("game must exist while playing");
        if state.terminal {
            return outcomes;
        }
        let outcome = service
            .submit(scripted_command(&state))
            .expect("scripted command must be legal");
        outcomes.push(outcome);
    }
    panic!("game {game_id} did not finish");
}
