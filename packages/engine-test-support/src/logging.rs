//! Shared tracing setup for engine tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_TEST_FILTER: &str = "warn";

/// Filter for test runs: `TEST_LOG`, then `RUST_LOG`, then [`DEFAULT_TEST_FILTER`].
///
/// `TEST_LOG=truco_engine=debug` shows every applied and rejected command.
pub fn test_filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_TEST_FILTER))
}

/// Install the test subscriber once per process.
///
/// Output goes through the test writer so the harness captures it per test.
/// Never panics when another subscriber is already installed.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let _ = fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
