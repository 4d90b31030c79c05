//! Engine test support utilities
//!
//! This crate provides utilities shared by the engine's unit and integration
//! tests: unified logging initialization, unique id helpers and the shared
//! proptest configuration.

pub mod logging;
pub mod proptest_prelude;
pub mod unique_helpers;

pub use unique_helpers::unique_game_id;
