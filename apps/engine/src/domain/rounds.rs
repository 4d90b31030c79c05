use tracing::debug;

use crate::domain::rules::{TieBreakRule, PLAYERS, ROUNDS_PER_HAND};
use crate::domain::state::{
    next_seat, require_round, require_turn, GameState, Round, RoundOutcome, Seat, Team,
};
use crate::domain::{Card, Slot};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    pub slot: Slot,
    pub round_no: u8,
    /// Outcome of the round, if this play completed it.
    pub round_outcome: Option<RoundOutcome>,
    /// Whether the hand is now decided.
    pub hand_decision: HandDecision,
}

/// Whether the rounds played so far settle the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandDecision {
    Undecided,
    Won(Team),
    /// Every round tied and the tie-break rule awards nobody.
    Drawn,
}

/// Check that `seat` may play the card at `card_index` right now.
pub fn check_play(
    state: &GameState,
    seat: Seat,
    card_index: usize,
    expected: Option<Card>,
    face_down: bool,
) -> Result<Card, DomainError> {
    if state.hand.pending.is_some() {
        return Err(DomainError::validation(
            ValidationKind::InvalidCommandForState,
            "A truco call is pending; respond before playing",
        ));
    }

    let turn = require_turn(state, "check_play")?;
    if turn != seat {
        return Err(DomainError::validation(
            ValidationKind::WrongActor,
            format!("Out of turn: seat {turn} plays next"),
        ));
    }

    let player = state
        .player(seat)
        .ok_or_else(|| DomainError::corruption(format!("No player at seat {seat}")))?;
    let card = match player.hand.get(card_index) {
        None => {
            return Err(DomainError::validation(
                ValidationKind::InvalidCardSelection,
                format!(
                    "Card index {card_index} out of range (hand holds {})",
                    player.hand.len()
                ),
            ))
        }
        Some(None) => {
            return Err(DomainError::validation(
                ValidationKind::InvalidCardSelection,
                format!("Card at index {card_index} was already played"),
            ))
        }
        Some(Some(card)) => *card,
    };

    if let Some(expected) = expected {
        if expected != card {
            return Err(DomainError::validation(
                ValidationKind::InvalidCardSelection,
                format!("Card at index {card_index} is {card}, not {expected}"),
            ));
        }
    }

    if face_down {
        let round = require_round(state, "check_play")?;
        if round.number == 1 {
            return Err(DomainError::validation(
                ValidationKind::InvalidCardSelection,
                "Cards cannot be played face down in the first round",
            ));
        }
    }

    Ok(card)
}

/// Play a card into the current round, resolving the round when it completes.
///
/// Does not finalize the hand; callers act on [`PlayCardResult::hand_decision`].
pub fn play_card(
    state: &mut GameState,
    seat: Seat,
    card_index: usize,
    expected: Option<Card>,
    face_down: bool,
) -> Result<PlayCardResult, DomainError> {
    let card = check_play(state, seat, card_index, expected, face_down)?;

    state.players[seat as usize].hand[card_index] = None;
    let slot = if face_down {
        Slot::Folded
    } else {
        Slot::Played(card)
    };

    let round = state
        .hand
        .current_round_mut()
        .ok_or_else(|| DomainError::corruption("Invariant violated: hand has no round"))?;
    round.slots[seat as usize] = slot;
    let round_no = round.number;

    let mut result = PlayCardResult {
        slot,
        round_no,
        round_outcome: None,
        hand_decision: HandDecision::Undecided,
    };

    if !round.is_complete() {
        state.turn = Some(next_seat(seat));
        return Ok(result);
    }

    let outcome = resolve_round(round);
    round.outcome = Some(outcome);
    let tied_leader = round.leader;
    result.round_outcome = Some(outcome);

    if let RoundOutcome::Won { seat: winner, .. } = outcome {
        state.players[winner as usize].rounds_won += 1;
    }

    debug!(
        game_id = state.game_id,
        hand_no = state.hand.number,
        round_no,
        outcome = ?outcome,
        "Round resolved"
    );

    let decision = decide_hand(
        &state.hand.round_results(),
        Team::of_seat(state.hand.first_seat),
        state.tie_break,
    );
    result.hand_decision = decision;

    if decision == HandDecision::Undecided {
        // Winner leads the next round; after a tie the same seat leads again.
        let leader = match outcome {
            RoundOutcome::Won { seat, .. } => seat,
            RoundOutcome::Tied => tied_leader,
        };
        state.hand.rounds.push(Round::new(round_no + 1, leader));
        state.turn = Some(leader);
    } else {
        state.turn = None;
    }

    Ok(result)
}

/// Resolve a complete round: strictly highest strength wins, equal top two tie.
pub fn resolve_round(round: &Round) -> RoundOutcome {
    let mut best_seat: Seat = 0;
    let mut best = round.slots[0].strength();
    let mut tied = false;
    for seat in 1..PLAYERS {
        let strength = round.slots[seat].strength();
        if strength > best {
            best = strength;
            best_seat = seat as Seat;
            tied = false;
        } else if strength == best {
            tied = true;
        }
    }
    if tied {
        RoundOutcome::Tied
    } else {
        RoundOutcome::Won {
            seat: best_seat,
            team: Team::of_seat(best_seat),
        }
    }
}

/// Decide the hand from the round outcomes resolved so far.
///
/// Two round wins take the hand. A tied first round defers to the first
/// decisive later round. A tie after a decided round goes to the earlier
/// winner; with one win each, a tied third round goes to the round-1 winner.
/// Three tied rounds fall to `tie_break`.
pub fn decide_hand(
    results: &[RoundOutcome],
    elder_team: Team,
    tie_break: TieBreakRule,
) -> HandDecision {
    let teams: Vec<Option<Team>> = results.iter().map(|r| r.winning_team()).collect();
    for team in Team::ALL {
        if teams.iter().filter(|t| **t == Some(team)).count() >= 2 {
            return HandDecision::Won(team);
        }
    }

    match teams.as_slice() {
        [Some(first), None] => HandDecision::Won(*first),
        [None, Some(second)] => HandDecision::Won(*second),
        [Some(first), Some(_), None] => HandDecision::Won(*first),
        [None, None, Some(third)] => HandDecision::Won(*third),
        [None, None, None] => match tie_break {
            TieBreakRule::FirstDecisiveRound => HandDecision::Drawn,
            TieBreakRule::ElderHand => HandDecision::Won(elder_team),
        },
        _ if teams.len() >= ROUNDS_PER_HAND as usize => HandDecision::Drawn,
        _ => HandDecision::Undecided,
    }
}
