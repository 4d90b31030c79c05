//! Engine settings loaded from the environment.
//!
//! - `TRUCO_WINNING_SCORE`: points a team needs to win (default 12)
//! - `TRUCO_INITIAL_DEALER`: dealer seat for hand 1 (default 3, so seat 0 opens)
//! - `TRUCO_TIE_BREAK`: `first_decisive_round` (default) or `elder_hand`

use std::env;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{
    TieBreakRule, DEFAULT_INITIAL_DEALER, DEFAULT_WINNING_SCORE, PLAYERS,
};
use crate::domain::state::Seat;
use crate::errors::domain::{DomainError, InfraErrorKind};

pub const WINNING_SCORE_VAR: &str = "TRUCO_WINNING_SCORE";
pub const INITIAL_DEALER_VAR: &str = "TRUCO_INITIAL_DEALER";
pub const TIE_BREAK_VAR: &str = "TRUCO_TIE_BREAK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub winning_score: u16,
    pub initial_dealer: Seat,
    pub tie_break: TieBreakRule,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            initial_dealer: DEFAULT_INITIAL_DEALER,
            tie_break: TieBreakRule::default(),
        }
    }
}

impl EngineConfig {
    /// Read overrides from the process environment. Unset or blank variables keep defaults.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(raw) = read(WINNING_SCORE_VAR) {
            config.winning_score = raw
                .parse::<u16>()
                .ok()
                .filter(|score| *score > 0)
                .ok_or_else(|| invalid(WINNING_SCORE_VAR, &raw, "a positive integer"))?;
        }

        if let Some(raw) = read(INITIAL_DEALER_VAR) {
            config.initial_dealer = raw
                .parse::<Seat>()
                .ok()
                .filter(|seat| (*seat as usize) < PLAYERS)
                .ok_or_else(|| invalid(INITIAL_DEALER_VAR, &raw, "a seat between 0 and 3"))?;
        }

        if let Some(raw) = read(TIE_BREAK_VAR) {
            config.tie_break = TieBreakRule::parse(&raw).ok_or_else(|| {
                invalid(TIE_BREAK_VAR, &raw, "first_decisive_round or elder_hand")
            })?;
        }

        Ok(config)
    }
}

fn invalid(key: &str, raw: &str, expected: &str) -> DomainError {
    DomainError::infra(
        InfraErrorKind::Config,
        format!("{key}='{raw}' is invalid: expected {expected}"),
    )
}
