//! `nature2d::logging` module installs `tracing` backend for applications that are built on `nature2d`.
//!
//! `nature2d` itself only emits events; nothing is printed until a subscriber is installed.
//!

use std::env;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{
    fmt::{self, time::uptime},
    prelude::*,
    EnvFilter, Registry,
};

/// Default logging environment filter: `nature2d` is debug, everything else is warn.
///
pub const DEFAULT_FILTER: &str = "warn,nature2d=debug";

/// Builds filter directives from [`DEFAULT_FILTER`] extended with `RUST_LOG` (if it is set).
///
fn filter_directives(env_filter: Option<String>) -> String {
    let mut filter: String = DEFAULT_FILTER.to_owned();
    if let Some(env_filter) = env_filter.filter(|env_filter| !env_filter.is_empty()) {
        filter.push(',');
        filter.push_str(&env_filter);
    }
    filter
}

/// Installs `tracing` subscriber that writes compact events to stdout.
///
/// Accepts ecosystem-standard `RUST_LOG` filters on top of [`DEFAULT_FILTER`].
/// Fails if global subscriber was already installed.
///
pub fn try_init_logging() -> Result<(), SetGlobalDefaultError> {
    let format = fmt::format()
        .compact()
        .with_timer(uptime())
        .with_line_number(true);
    let stdout_log = fmt::layer().event_format(format);

    let filter: String = filter_directives(env::var(EnvFilter::DEFAULT_ENV).ok());
    let subscriber = Registry::default()
        .with(EnvFilter::new(filter))
        .with(stdout_log);
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::trace!("installed log subscriber");
    Ok(())
}
/// Same as [`try_init_logging`], but keeps already installed subscriber instead of failing.
///
pub fn init_logging() {
    if try_init_logging().is_err() {
        tracing::debug!("log subscriber is already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_directives, init_logging, DEFAULT_FILTER};

    #[test]
    fn directives() {
        assert_eq!(filter_directives(None), DEFAULT_FILTER);
        assert_eq!(filter_directives(Some(String::new())), DEFAULT_FILTER);
        assert_eq!(
            filter_directives(Some(String::from("nature2d=trace"))),
            "warn,nature2d=debug,nature2d=trace"
        );
    }

    #[test]
    fn repeated_initialization() {
        init_logging();
        init_logging();
        tracing::debug!("logging survives repeated initialization");
    }
}
