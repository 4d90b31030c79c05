//! In-process authority over game state.
//!
//! Holds one state per game id. Commands for the same game are serialized by
//! a per-game mutex; different games run in parallel. Events are queued while
//! the game lock is held and published after it is released, in commit order.
//! `submit` returns once its own events have been delivered.
//!
//! Handlers may read from the service, but must not submit commands for the
//! game whose event they are handling.

use std::collections::VecDeque;
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::commands::Command;
use crate::domain::machine::{process_command, ExecutionContext};
use crate::domain::state::{GameId, GameState};
use crate::domain::validation::validate_command;
use crate::errors::domain::DomainError;
use crate::events::model::DomainEvent;
use crate::events::publisher::EventPublisher;

/// Per-game state plus the batches of events waiting for delivery.
#[derive(Debug, Default)]
struct GameEntry {
    state: Mutex<Option<GameState>>,
    outbox: Mutex<VecDeque<Vec<DomainEvent>>>,
    /// Held by the thread draining `outbox`.
    delivery: Mutex<()>,
}

type GameSlot = Arc<GameEntry>;

/// Committed result of a command.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub state: GameState,
    pub events: Vec<DomainEvent>,
}

pub struct GameFlowService {
    config: EngineConfig,
    publisher: Arc<EventPublisher>,
    games: DashMap<GameId, GameSlot>,
    /// Seed for every new game instead of a random one.
    fixed_seed: Option<u64>,
}

impl GameFlowService {
    pub fn new(config: EngineConfig, publisher: Arc<EventPublisher>) -> Self {
        Self {
            config,
            publisher,
            games: DashMap::new(),
            fixed_seed: None,
        }
    }

    /// Deal every new game from `seed` (reproducible games).
    pub fn with_fixed_seed(mut self, seed: u64) -> Self {
        self.fixed_seed = Some(seed);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn publisher(&self) -> &Arc<EventPublisher> {
        &self.publisher
    }

    /// Validate, apply and commit `cmd`, then publish its events.
    pub fn submit(&self, cmd: Command) -> Result<CommandOutcome, DomainError> {
        let game_id = cmd.game_id();
        let slot = match &cmd {
            Command::StartGame { .. } => Some(self.slot_or_create(game_id)),
            _ => self.slot(game_id),
        };
        let Some(slot) = slot else {
            return process_command(None, &cmd, &self.context(0)).map(|t| CommandOutcome {
                state: t.state,
                events: t.events,
            });
        };

        let outcome = {
            let mut guard = slot.state.lock();
            let ctx = self.context(self.next_seed());
            let transition = process_command(guard.as_ref(), &cmd, &ctx)?;
            *guard = Some(transition.state.clone());
            slot.outbox.lock().push_back(transition.events.clone());
            CommandOutcome {
                state: transition.state,
                events: transition.events,
            }
        };

        if matches!(cmd, Command::StartGame { .. }) {
            info!(
                game_id,
                dealer = outcome.state.dealer,
                winning_score = outcome.state.winning_score,
                "Game started"
            );
        }

        self.deliver(game_id, &slot);
        debug!(game_id, version = outcome.state.version, "Command committed");

        Ok(outcome)
    }

    /// Check `cmd` against the current state without applying it.
    pub fn validate(&self, cmd: &Command) -> Result<(), DomainError> {
        match self.slot(cmd.game_id()) {
            Some(slot) => validate_command(slot.state.lock().as_ref(), cmd),
            None => validate_command(None, cmd),
        }
    }

    /// Snapshot of the committed state, if the game exists.
    pub fn get_game_state(&self, game_id: GameId) -> Option<GameState> {
        let slot = self.slot(game_id)?;
        let state = slot.state.lock().clone();
        state
    }

    /// Drop a game and its state. Returns whether it existed.
    ///
    /// The service never evicts games on its own; embedders call this once a
    /// finished game is no longer needed.
    pub fn remove_game(&self, game_id: GameId) -> bool {
        let removed = self.games.remove(&game_id).is_some();
        if removed {
            debug!(game_id, "Game removed");
        }
        removed
    }

    /// Number of games that have been started.
    pub fn game_count(&self) -> usize {
        self.games
            .iter()
            .filter(|entry| entry.value().state.lock().is_some())
            .count()
    }

    fn slot(&self, game_id: GameId) -> Option<GameSlot> {
        self.games.get(&game_id).map(|entry| Arc::clone(entry.value()))
    }

    fn slot_or_create(&self, game_id: GameId) -> GameSlot {
        Arc::clone(
            self.games
                .entry(game_id)
                .or_insert_with(|| Arc::new(GameEntry::default()))
                .value(),
        )
    }

    /// Publish queued batches oldest first. A thread that finds the queue
    /// already drained had its batch delivered by the previous holder.
    fn deliver(&self, game_id: GameId, slot: &GameEntry) {
        let _turn = slot.delivery.lock();
        loop {
            let Some(batch) = slot.outbox.lock().pop_front() else {
                break;
            };
            let summary = self.publisher.publish(&batch);
            debug!(
                game_id,
                delivered = summary.delivered,
                failed = summary.failed,
                "Events published"
            );
        }
    }

    fn context(&self, game_seed: u64) -> ExecutionContext<'_> {
        ExecutionContext::new(&self.config, game_seed)
    }

    fn next_seed(&self) -> u64 {
        self.fixed_seed.unwrap_or_else(rand::random::<u64>)
    }
}

impl std::fmt::Debug for GameFlowService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameFlowService")
            .field("config", &self.config)
            .field("games", &self.games.len())
            .finish()
    }
}
