use dashmap::DashMap;
use tracing::{debug, info};

use crate::domain::state::{GameId, Team};
use crate::events::model::{DomainEvent, EventKind, EventPayload};
use crate::events::publisher::{EventHandler, HandlerError};

/// Logs every event as a structured record.
#[derive(Debug, Default)]
pub struct TracingEventHandler;

impl TracingEventHandler {
    pub const NAME: &'static str = "tracing";
}

impl EventHandler for TracingEventHandler {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        match &event.payload {
            EventPayload::HandResolved {
                hand_no,
                winner,
                points,
                reason,
                scores,
            } => info!(
                game_id = event.game_id,
                event_id = %event.event_id,
                hand_no,
                winner = ?winner,
                points,
                reason = ?reason,
                scores = ?scores,
                "Hand resolved"
            ),
            EventPayload::GameWon {
                winner,
                scores,
                hands_played,
            } => info!(
                game_id = event.game_id,
                event_id = %event.event_id,
                winner = ?winner,
                scores = ?scores,
                hands_played,
                "Game won"
            ),
            payload => debug!(
                game_id = event.game_id,
                event_id = %event.event_id,
                actor = ?event.actor,
                event = %payload.kind(),
                "Domain event"
            ),
        }
        Ok(())
    }

    fn can_handle(&self, _kind: EventKind) -> bool {
        true
    }

    fn priority(&self) -> i32 {
        // After state-keeping handlers so logs reflect their view.
        100
    }
}

/// Running team totals per game, kept from `HandResolved`.
#[derive(Debug, Default)]
pub struct ScoreboardHandler {
    totals: DashMap<GameId, Standing>,
}

/// Scoreboard entry for one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Standing {
    pub scores: [u16; 2],
    pub hands: u32,
    pub winner: Option<Team>,
}

impl ScoreboardHandler {
    pub const NAME: &'static str = "scoreboard";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn standing(&self, game_id: GameId) -> Option<Standing> {
        self.totals.get(&game_id).map(|entry| *entry)
    }

    pub fn scores(&self, game_id: GameId) -> Option<[u16; 2]> {
        self.standing(game_id).map(|s| s.scores)
    }

    /// Drop the entry for a game the embedder no longer tracks.
    pub fn forget(&self, game_id: GameId) -> Option<Standing> {
        self.totals.remove(&game_id).map(|(_, standing)| standing)
    }
}

impl EventHandler for ScoreboardHandler {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        match &event.payload {
            EventPayload::GameStarted { .. } => {
                self.totals.insert(event.game_id, Standing::default());
            }
            EventPayload::HandResolved {
                winner, points, ..
            } => {
                let mut entry = self.totals.entry(event.game_id).or_default();
                if entry.winner.is_some() {
                    return Err(HandlerError::Rejected(format!(
                        "game {} already has a winner",
                        event.game_id
                    )));
                }
                if let Some(team) = winner {
                    entry.scores[team.index()] += u16::from(*points);
                }
                entry.hands += 1;
            }
            EventPayload::GameWon { winner, scores, .. } => {
                let mut entry = self.totals.entry(event.game_id).or_default();
                if entry.scores != *scores {
                    return Err(HandlerError::Failed(format!(
                        "scoreboard {:?} disagrees with final score {:?} for game {}",
                        entry.scores, scores, event.game_id
                    )));
                }
                entry.winner = Some(*winner);
            }
            _ => {}
        }
        Ok(())
    }

    fn can_handle(&self, kind: EventKind) -> bool {
        matches!(
            kind,
            EventKind::GameStarted | EventKind::HandResolved | EventKind::GameWon
        )
    }

    fn priority(&self) -> i32 {
        0
    }
}
