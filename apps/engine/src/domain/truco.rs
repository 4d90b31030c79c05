//! Stake negotiation: truco calls, raises (seis, doze), acceptance.
//!
//! Stakes climb 2 → 4 → 8 → 12 and never go down within a hand. Raises
//! alternate between teams: while a call is unanswered only the responding
//! team may raise it. Once answered, the seat to act may call again.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::state::{require_turn, GameState, Seat, Team};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stake {
    /// 2 points; no call made.
    Base,
    /// 4 points.
    Truco,
    /// 8 points.
    Seis,
    /// 12 points; no further raise.
    Doze,
}

impl Stake {
    pub const LADDER: [Stake; 4] = [Stake::Base, Stake::Truco, Stake::Seis, Stake::Doze];

    pub const fn points(self) -> u8 {
        match self {
            Stake::Base => 2,
            Stake::Truco => 4,
            Stake::Seis => 8,
            Stake::Doze => 12,
        }
    }

    pub const fn next(self) -> Option<Stake> {
        match self {
            Stake::Base => Some(Stake::Truco),
            Stake::Truco => Some(Stake::Seis),
            Stake::Seis => Some(Stake::Doze),
            Stake::Doze => None,
        }
    }
}

/// An unanswered call or raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCall {
    pub caller: Seat,
    pub calling_team: Team,
    /// Stake that takes effect if the responding team accepts.
    pub requested: Stake,
}

impl PendingCall {
    pub fn responding_team(&self) -> Team {
        self.calling_team.opponent()
    }
}

/// Result of a successful call or raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallResult {
    /// Locked stake after the call (changes only on a counter-raise).
    pub locked: Stake,
    pub requested: Stake,
    /// True when the call answered a pending call by raising it.
    pub counter_raise: bool,
}

/// Check that `seat` may call truco or raise right now; returns the stake it would request.
pub fn check_call(state: &GameState, seat: Seat) -> Result<Stake, DomainError> {
    let hand = &state.hand;
    let team = Team::of_seat(seat);

    // While a call is pending the next rung is above the requested stake.
    let base = hand.pending.map(|p| p.requested).unwrap_or(hand.stake);
    let Some(requested) = base.next() else {
        return Err(DomainError::validation(
            ValidationKind::IllegalStakeEscalation,
            format!("Stake is already at the maximum of {}", base.points()),
        ));
    };

    match hand.pending {
        Some(pending) => {
            if team == pending.calling_team {
                return Err(DomainError::validation(
                    ValidationKind::IllegalStakeEscalation,
                    "Your team's call is unanswered; the other team must respond first",
                ));
            }
        }
        None => {
            let turn = require_turn(state, "check_call")?;
            if turn != seat {
                return Err(DomainError::validation(
                    ValidationKind::WrongActor,
                    format!("Only seat {turn} may call truco now"),
                ));
            }
        }
    }

    Ok(requested)
}

/// Check that `seat` may accept or refuse the pending call.
pub fn check_response(state: &GameState, seat: Seat) -> Result<PendingCall, DomainError> {
    let Some(pending) = state.hand.pending else {
        return Err(DomainError::validation(
            ValidationKind::InvalidCommandForState,
            "No truco call is pending",
        ));
    };
    if Team::of_seat(seat) != pending.responding_team() {
        return Err(DomainError::validation(
            ValidationKind::WrongActor,
            format!("Team {:?} must respond to the call", pending.responding_team()),
        ));
    }
    Ok(pending)
}

/// Call truco or raise. A raise made in answer to a pending call accepts
/// the pending stake first.
pub fn call_or_raise(state: &mut GameState, seat: Seat) -> Result<CallResult, DomainError> {
    let requested = check_call(state, seat)?;
    let team = Team::of_seat(seat);
    let hand = &mut state.hand;

    let counter_raise = match hand.pending.take() {
        Some(pending) => {
            hand.lock_stake(pending.requested);
            true
        }
        None => false,
    };

    hand.pending = Some(PendingCall {
        caller: seat,
        calling_team: team,
        requested,
    });
    hand.last_raiser = Some(team);

    debug!(
        game_id = state.game_id,
        seat,
        requested = requested.points(),
        counter_raise,
        "Stake escalation requested"
    );

    Ok(CallResult {
        locked: state.hand.stake,
        requested,
        counter_raise,
    })
}

/// Accept the pending call; returns the newly locked stake.
pub fn accept(state: &mut GameState, seat: Seat) -> Result<Stake, DomainError> {
    let pending = check_response(state, seat)?;
    state.hand.pending = None;
    state.hand.lock_stake(pending.requested);
    Ok(pending.requested)
}
