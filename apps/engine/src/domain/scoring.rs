use tracing::{debug, info};

use crate::domain::state::{
    next_seat, GameState, HandEndReason, HandOutcome, PreviousHand, Seat, Team,
};
use crate::domain::truco::check_response;
use crate::errors::domain::{DomainError, ValidationKind};

/// Award the hand, record it as the previous hand and check for game end.
///
/// Leaves `state.hand` in place so callers can snapshot it before dealing on.
pub fn finalize_hand(
    state: &mut GameState,
    winner: Option<Team>,
    reason: HandEndReason,
) -> HandOutcome {
    let points = match winner {
        Some(_) => state.hand.stake.points(),
        None => 0,
    };
    if let Some(team) = winner {
        state.teams[team.index()].score += u16::from(points);
    }

    let outcome = HandOutcome {
        winner,
        points,
        reason,
    };
    state.hand.pending = None;
    state.hand.outcome = Some(outcome);
    state.hands_played += 1;
    state.previous_hand = Some(PreviousHand {
        number: state.hand.number,
        dealer: state.hand.dealer,
        outcome,
        rounds: state.hand.rounds.clone(),
    });
    state.turn = None;

    debug!(
        game_id = state.game_id,
        hand_no = state.hand.number,
        winner = ?winner,
        points,
        reason = ?reason,
        scores = ?state.scores(),
        "Hand finalized"
    );

    if let Some(team) = winner {
        if state.team(team).score >= state.winning_score {
            state.terminal = true;
            state.winner = Some(team);
            info!(
                game_id = state.game_id,
                winner = ?team,
                scores = ?state.scores(),
                "Game won"
            );
        }
    }

    outcome
}

/// Rotate the dealer and deal the next hand. No-op on a finished game.
pub fn start_next_hand(state: &mut GameState) {
    if state.terminal {
        return;
    }
    let dealer = next_seat(state.dealer);
    let number = state.hand.number + 1;
    state.begin_hand(number, dealer);
}

/// Refuse the pending call. The calling team wins the stake locked before the call.
pub fn surrender_truco(state: &mut GameState, seat: Seat) -> Result<HandOutcome, DomainError> {
    let pending = check_response(state, seat)?;
    Ok(finalize_hand(
        state,
        Some(pending.calling_team),
        HandEndReason::TrucoSurrendered,
    ))
}

/// Check that `seat` may give up the current hand.
pub fn check_hand_surrender(state: &GameState, seat: Seat) -> Result<(), DomainError> {
    if let Some(pending) = state.hand.pending {
        return Err(DomainError::validation(
            ValidationKind::InvalidCommandForState,
            format!(
                "A call to {} points is pending; accept or refuse it instead (seat {seat})",
                pending.requested.points()
            ),
        ));
    }
    if state.hand.outcome.is_some() {
        return Err(DomainError::validation(
            ValidationKind::InvalidCommandForState,
            "Hand is already decided",
        ));
    }
    Ok(())
}

/// Give up the hand; the opposing team wins the locked stake.
pub fn surrender_hand(state: &mut GameState, seat: Seat) -> Result<HandOutcome, DomainError> {
    check_hand_surrender(state, seat)?;
    let winner = Team::of_seat(seat).opponent();
    Ok(finalize_hand(
        state,
        Some(winner),
        HandEndReason::HandSurrendered,
    ))
}
