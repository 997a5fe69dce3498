// quote-patcher - rewrites the feedback quote in the video analysis insights panel

pub mod config;
pub mod diff;
pub mod error;
pub mod error_handling;
pub mod patch;

pub use config::PatchTarget;
pub use error::{PatchError, PatchResult};
pub use patch::{patch, PatchOutcome};

use tracing::debug;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Install the tracing subscriber.
///
/// Logs go to stderr so stdout only ever carries the confirmation line.
/// RUST_LOG overrides `config::DEFAULT_LOG_FILTER`. Calling this more than
/// once keeps the first subscriber.
///
/// @param ansi_colors - Whether stderr is an interactive terminal
/// When false (piped into CI logs or a file), the output is kept plain
pub fn init_with_logger(ansi_colors: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    // Fall back to the built-in filter when RUST_LOG is unset or unparsable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    let installed = if !ansi_colors {
        // Plain format: no escape codes, no timestamps, no module targets
        fmt::Subscriber::builder()
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .try_init()
            .is_ok()
    } else {
        // Interactive terminal: colours and module targets for debugging
        fmt::Subscriber::builder()
            .with_ansi(true)
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .is_ok()
    };

    // try_init fails when a subscriber already exists (tests, embedding); that one stays
    if installed {
        debug!("Initializing quote-patcher v{}", version());
    }
}
