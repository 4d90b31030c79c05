//! Test helpers for generating unique test data
//!
//! Games registered with a shared service must not collide across tests, so
//! ids are derived from fresh ULIDs.

use ulid::Ulid;

/// Generate a positive game id that is unique for the test run.
///
/// # Examples
/// ```
/// use engine_test_support::unique_game_id;
///
/// let a = unique_game_id();
/// let b = unique_game_id();
/// assert_ne!(a, b);
/// assert!(a > 0);
/// ```
pub fn unique_game_id() -> i64 {
    // 62 random bits keep the id positive and non-zero in practice.
    let bits = (Ulid::new().random() as u64) >> 2;
    (bits as i64).max(1)
}
