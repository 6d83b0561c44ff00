//! Logging to the terminal
//!
//! Everything goes through `tracing`.  The two macros here tag lines by where they come from so
//! they can be filtered separately, e.g. `RUST_LOG=pingguard::event=debug`.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,serenity=warn";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Only print colors when printing to a terminal
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stdout().is_terminal())
        .init();
}

/// Something happened on Discord
#[macro_export]
macro_rules! log_event {
    ($($args:tt)+) => {
        ::tracing::info!(target: "pingguard::event", $($args)+)
    };
}

/// Something happened inside the bot
#[macro_export]
macro_rules! log_internal {
    ($($args:tt)+) => {
        ::tracing::info!(target: "pingguard::internal", $($args)+)
    };
}
