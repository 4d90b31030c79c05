//! Command processing: `(state, command) -> (state', events)`.
//!
//! Works on a clone of the incoming state, so a rejected command leaves the
//! caller's state untouched.

use tracing::{debug, error};

use crate::config::EngineConfig;
use crate::domain::commands::Command;
use crate::domain::rounds::{play_card, HandDecision};
use crate::domain::scoring::{finalize_hand, start_next_hand, surrender_hand, surrender_truco};
use crate::domain::state::{GameId, GameState, HandEndReason, HandOutcome, Team};
use crate::domain::truco::{accept, call_or_raise};
use crate::domain::validation::validate_command;
use crate::domain::Slot;
use crate::errors::domain::DomainError;
use crate::events::model::{DomainEvent, EventPayload};

const DEFAULT_PLAYER_NAME: &str = "Player";

/// Inputs the machine needs beyond state and command.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionContext<'a> {
    pub config: &'a EngineConfig,
    /// Seed for a game created by `StartGame`; ignored by other commands.
    pub game_seed: u64,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(config: &'a EngineConfig, game_seed: u64) -> Self {
        Self { config, game_seed }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<DomainEvent>,
}

/// Validate and apply `cmd`.
pub fn process_command(
    state: Option<&GameState>,
    cmd: &Command,
    ctx: &ExecutionContext<'_>,
) -> Result<Transition, DomainError> {
    let game_id = cmd.game_id();
    let result = validate_command(state, cmd).and_then(|()| apply(state, cmd, ctx));

    match &result {
        Ok(transition) => debug!(
            game_id,
            seat = cmd.seat(),
            command = %cmd.kind(),
            version = transition.state.version,
            events = transition.events.len(),
            "Command applied"
        ),
        Err(err) if err.is_rejection() => debug!(
            game_id,
            seat = cmd.seat(),
            command = %cmd.kind(),
            code = %err.code(),
            detail = err.detail(),
            "Command rejected"
        ),
        Err(err) => error!(
            game_id,
            seat = cmd.seat(),
            command = %cmd.kind(),
            code = %err.code(),
            error = %err,
            "Command processing failed"
        ),
    }

    result
}

fn apply(
    state: Option<&GameState>,
    cmd: &Command,
    ctx: &ExecutionContext<'_>,
) -> Result<Transition, DomainError> {
    let mut events = Vec::new();

    let mut next = match cmd {
        Command::StartGame {
            game_id,
            player_name,
        } => {
            let mut next = start_game(*game_id, player_name.as_deref(), ctx);
            next.version = state.map_or(0, |prior| prior.version);
            push_game_started(&next, &mut events);
            next
        }
        _ => {
            let current = state.ok_or_else(|| {
                DomainError::corruption(format!("No state for validated command on game {}", cmd.game_id()))
            })?;
            let mut next = current.clone();
            apply_to_game(&mut next, cmd, &mut events)?;
            next
        }
    };

    next.version += 1;
    Ok(Transition {
        state: next,
        events,
    })
}

fn start_game(game_id: GameId, player_name: Option<&str>, ctx: &ExecutionContext<'_>) -> GameState {
    let name = player_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_PLAYER_NAME);
    GameState::new(
        game_id,
        ctx.game_seed,
        name,
        ctx.config.initial_dealer,
        ctx.config.winning_score,
        ctx.config.tie_break,
    )
}

fn push_game_started(state: &GameState, events: &mut Vec<DomainEvent>) {
    events.push(DomainEvent::new(
        state.game_id,
        Some(0),
        EventPayload::GameStarted {
            player_names: state.players.iter().map(|p| p.name.clone()).collect(),
            dealer: state.dealer,
            winning_score: state.winning_score,
        },
    ));
    push_hand_started(state, events);
}

fn push_hand_started(state: &GameState, events: &mut Vec<DomainEvent>) {
    events.push(DomainEvent::new(
        state.game_id,
        None,
        EventPayload::HandStarted {
            hand_no: state.hand.number,
            dealer: state.hand.dealer,
            first_seat: state.hand.first_seat,
            stake: state.hand.stake,
        },
    ));
}

fn apply_to_game(
    state: &mut GameState,
    cmd: &Command,
    events: &mut Vec<DomainEvent>,
) -> Result<(), DomainError> {
    let game_id = state.game_id;
    let seat = cmd.seat();
    let hand_no = state.hand.number;

    match cmd {
        Command::StartGame { .. } => Err(DomainError::corruption(
            "StartGame must not reach in-game dispatch",
        )),
        Command::PlayCard {
            card_index,
            expected,
            face_down,
            ..
        } => {
            let played = play_card(state, seat, *card_index, *expected, *face_down)?;
            events.push(DomainEvent::new(
                game_id,
                Some(seat),
                EventPayload::CardPlayed {
                    hand_no,
                    round_no: played.round_no,
                    seat,
                    card: match played.slot {
                        Slot::Played(card) => Some(card),
                        _ => None,
                    },
                    face_down: *face_down,
                },
            ));
            if let Some(outcome) = played.round_outcome {
                events.push(DomainEvent::new(
                    game_id,
                    None,
                    EventPayload::RoundResolved {
                        hand_no,
                        round_no: played.round_no,
                        outcome,
                    },
                ));
            }
            match played.hand_decision {
                HandDecision::Undecided => {}
                HandDecision::Won(team) => {
                    let outcome = finalize_hand(state, Some(team), HandEndReason::Rounds);
                    close_hand(state, outcome, events);
                }
                HandDecision::Drawn => {
                    let outcome = finalize_hand(state, None, HandEndReason::Rounds);
                    close_hand(state, outcome, events);
                }
            }
            Ok(())
        }
        Command::CallTrucoOrRaise { .. } => {
            let call = call_or_raise(state, seat)?;
            events.push(DomainEvent::new(
                game_id,
                Some(seat),
                EventPayload::TrucoCalled {
                    hand_no,
                    seat,
                    team: Team::of_seat(seat),
                    locked: call.locked,
                    requested: call.requested,
                    counter_raise: call.counter_raise,
                },
            ));
            Ok(())
        }
        Command::AcceptTruco { .. } => {
            let stake = accept(state, seat)?;
            events.push(DomainEvent::new(
                game_id,
                Some(seat),
                EventPayload::TrucoAccepted {
                    hand_no,
                    seat,
                    stake,
                },
            ));
            Ok(())
        }
        Command::SurrenderTruco { .. } => {
            let outcome = surrender_truco(state, seat)?;
            let winner = require_winner(&outcome)?;
            events.push(DomainEvent::new(
                game_id,
                Some(seat),
                EventPayload::TrucoSurrendered {
                    hand_no,
                    seat,
                    stake: state.hand.stake,
                    winner,
                    snapshot: Box::new(state.clone()),
                },
            ));
            close_hand(state, outcome, events);
            Ok(())
        }
        Command::SurrenderHand { .. } => {
            let outcome = surrender_hand(state, seat)?;
            let winner = require_winner(&outcome)?;
            events.push(DomainEvent::new(
                game_id,
                Some(seat),
                EventPayload::HandSurrendered {
                    hand_no,
                    seat,
                    stake: state.hand.stake,
                    winner,
                    snapshot: Box::new(state.clone()),
                },
            ));
            close_hand(state, outcome, events);
            Ok(())
        }
    }
}

fn require_winner(outcome: &HandOutcome) -> Result<Team, DomainError> {
    outcome
        .winner
        .ok_or_else(|| DomainError::corruption("Surrendered hand has no winner"))
}

/// Emit the hand result, then either end the game or deal the next hand.
fn close_hand(state: &mut GameState, outcome: HandOutcome, events: &mut Vec<DomainEvent>) {
    events.push(DomainEvent::new(
        state.game_id,
        None,
        EventPayload::HandResolved {
            hand_no: state.hand.number,
            winner: outcome.winner,
            points: outcome.points,
            reason: outcome.reason,
            scores: state.scores(),
        },
    ));

    if state.terminal {
        if let Some(winner) = state.winner {
            events.push(DomainEvent::new(
                state.game_id,
                None,
                EventPayload::GameWon {
                    winner,
                    scores: state.scores(),
                    hands_played: state.hands_played,
                },
            ));
        }
        return;
    }

    start_next_hand(state);
    push_hand_started(state, events);
}
