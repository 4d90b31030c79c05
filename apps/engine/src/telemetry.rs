use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the JSON subscriber for hosts embedding the engine.
///
/// `RUST_LOG` overrides the default `info` filter. Safe to call more than
/// once; only the first call installs a subscriber.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
