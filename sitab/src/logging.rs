//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! sitablib reports through `tracing` events: a `warn` when a table is
//! skipped because its header labels don't fit, an `info` confirmation when
//! a document is written, and `debug` details while tokenizing. The CLI
//! decides how much of that reaches stderr.

use std::io;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for logging behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Most verbose level shown
    pub level: Level,
    /// Whether to use ANSI colors
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: console::colors_enabled_stderr(),
        }
    }
}

impl LogConfig {
    /// Derive the level from `-v`/`-q` counts.
    ///
    /// - `-q`: error
    /// - default: warn
    /// - `-v`: info
    /// - `-vv` and up: debug
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = match (quiet, verbose) {
            (true, _) => Level::ERROR,
            (false, 0) => Level::WARN,
            (false, 1) => Level::INFO,
            (false, _) => Level::DEBUG,
        };
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Build an `EnvFilter` for our crates; `RUST_LOG` wins when set.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,sitab={level},sitablib={level}",
            level = level.as_str().to_lowercase()
        ))
    })
}

/// Install the global subscriber. Call once, at startup.
pub fn init_logging(config: &LogConfig) {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .init();
}
