//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod commands;
pub mod dealing;
pub mod machine;
pub mod rounds;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod truco;
pub mod validation;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_machine;
#[cfg(test)]
mod tests_props_round_winner;
#[cfg(test)]
mod tests_props_suits;

// Re-exports for ergonomics
pub use cards_logic::card_strength;
pub use cards_types::{Card, Rank, Slot, Suit};
pub use commands::{Command, CommandKind};
pub use dealing::deal_hands;
pub use machine::{process_command, ExecutionContext, Transition};
pub use rules::TieBreakRule;
pub use seed_derivation::derive_dealing_seed;
pub use state::{GameId, GameState, Seat, Team};
pub use truco::Stake;
pub use validation::validate_command;
