#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::EngineConfig;
pub use domain::{
    process_command, validate_command, Card, Command, CommandKind, ExecutionContext, GameId,
    GameState, Rank, Seat, Slot, Stake, Suit, Team, TieBreakRule, Transition,
};
pub use errors::{DomainError, ErrorCode};
pub use events::{
    DomainEvent, EventHandler, EventKind, EventPayload, EventPublisher, HandlerError,
    PublishSummary, ScoreboardHandler, TracingEventHandler,
};
pub use services::{CommandOutcome, GameFlowService};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
