//! RNG seed derivation for deterministic dealing.
//!
//! Every hand of a game is dealt from a seed derived from the game seed and
//! the hand number, so replaying the same command stream reproduces the same
//! cards.

/// Derive a seed for dealing a given hand.
///
/// Unique per (game seed, hand number); `hand_no` is 1-based.
pub fn derive_dealing_seed(game_seed: u64, hand_no: u32) -> u64 {
    game_seed
        .wrapping_add((hand_no as u64).wrapping_mul(1_000_003))
        .wrapping_add(2)
}
