//! Structured logging for the spinball viewer.
//!
//! Console output through `tracing-subscriber` with uptime timestamps and
//! targets, plus an optional JSON log file. `RUST_LOG` takes precedence over
//! the configured level.

use std::path::{Path, PathBuf};

use spinball_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file inside the log directory.
pub const LOG_FILE_NAME: &str = "spinball.log";

/// Filter directive derived from the config, falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Path of the JSON log file when file logging is enabled for this run.
#[must_use]
pub fn log_file_path(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) -> Option<PathBuf> {
    let wanted = debug_build || config.is_some_and(|c| c.debug.log_to_file);
    match log_dir {
        Some(dir) if wanted => Some(dir.join(LOG_FILE_NAME)),
        _ => None,
    }
}

/// Install the global tracing subscriber. Call once, early in `main`.
///
/// * `log_dir` - directory for the JSON log file
/// * `debug_build` - debug builds always write the log file when `log_dir` is given
/// * `config` - source of the log level and the `log_to_file` switch
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_directive(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if let Some(log_path) = log_file_path(log_dir, debug_build, config)
        && let Some(parent) = log_path.parent()
        && std::fs::create_dir_all(parent).is_ok()
        && let Ok(log_file) = std::fs::File::create(&log_path)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        tracing::debug!(filter = %filter_str, file = %log_path.display(), "logging initialised");
        return;
    }

    subscriber.init();
    tracing::debug!(filter = %filter_str, "logging initialised");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_without_config() {
        assert_eq!(filter_directive(None), "info");
    }

    #[test]
    fn test_filter_from_config() {
        let mut config = Config::default();
        config.debug.log_level = " debug,spinball_hud=trace ".to_string();
        assert_eq!(filter_directive(Some(&config)), "debug,spinball_hud=trace");
    }

    #[test]
    fn test_blank_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level = "  ".to_string();
        assert_eq!(filter_directive(Some(&config)), DEFAULT_FILTER);
    }

    #[test]
    fn test_directives_parse() {
        for directive in ["info", "warn,spinball_hud=debug", "trace", "error"] {
            assert!(
                EnvFilter::try_new(directive).is_ok(),
                "failed to parse {directive}"
            );
        }
    }

    #[test]
    fn test_log_file_only_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(log_file_path(Some(dir.path()), false, None), None);
        assert_eq!(
            log_file_path(Some(dir.path()), true, None),
            Some(dir.path().join("spinball.log"))
        );

        let mut config = Config::default();
        config.debug.log_to_file = true;
        assert_eq!(
            log_file_path(Some(dir.path()), false, Some(&config)),
            Some(dir.path().join(LOG_FILE_NAME))
        );
        assert_eq!(log_file_path(None, true, Some(&config)), None);
    }
}
