//! File logging for the terminal UI.
//!
//! The UI owns the terminal, so events go to a log file in the data directory
//! through a non-blocking writer. Filters come from `POPMENU_LOG` first, then
//! the configured level.

use std::fs;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "POPMENU_LOG";

/// Level used when neither the environment nor the configuration sets one.
pub const DEFAULT_LEVEL: &str = "info";

const LOG_FILE_NAME: &str = "popmenu.log";

/// Keeps the background writer alive. Dropping it flushes pending events.
#[must_use = "logging stops when the guard is dropped"]
pub struct LoggingGuard {
	_worker: Option<WorkerGuard>,
}

impl LoggingGuard {
	/// Guard for a session without logging.
	pub fn disabled() -> Self {
		Self { _worker: None }
	}
}

/// Install the global subscriber writing to `file`, or to `popmenu.log` in
/// the data directory. Failures leave logging disabled.
pub fn initialize(level: Option<&str>, file: Option<&Path>) -> LoggingGuard {
	let path = match file {
		Some(path) => path.to_path_buf(),
		None => match default_log_file() {
			Ok(path) => path,
			Err(_) => return LoggingGuard::disabled(),
		},
	};

	match init_file_logging(level, &path) {
		Ok(worker) => {
			tracing::debug!(path = %path.display(), "logging initialized");
			LoggingGuard {
				_worker: Some(worker),
			}
		}
		Err(_) => LoggingGuard::disabled(),
	}
}

fn init_file_logging(level: Option<&str>, path: &Path) -> Result<WorkerGuard> {
	let dir = path
		.parent()
		.filter(|dir| !dir.as_os_str().is_empty())
		.unwrap_or(Path::new("."));
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let file = fs::OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let (writer, guard) = tracing_appender::non_blocking(file);
	tracing_subscriber::fmt()
		.with_writer(writer)
		.with_env_filter(build_env_filter(level))
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to install subscriber: {err}"))?;

	Ok(guard)
}

/// Priority: `POPMENU_LOG`, then `level`, then [`DEFAULT_LEVEL`].
pub fn build_env_filter(level: Option<&str>) -> EnvFilter {
	filter_from(env::var(LOG_ENV).ok().as_deref(), level)
}

/// First directive that parses. Blank values count as unset.
fn filter_from(env_value: Option<&str>, level: Option<&str>) -> EnvFilter {
	[env_value, level]
		.into_iter()
		.flatten()
		.filter(|directive| !directive.trim().is_empty())
		.find_map(|directive| EnvFilter::try_new(directive).ok())
		.unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}

/// `popmenu.log` inside the data directory.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Whether `level` is a plain level name accepted by the filter.
pub fn is_valid_level(level: &str) -> bool {
	matches!(
		level.trim().to_ascii_lowercase().as_str(),
		"trace" | "debug" | "info" | "warn" | "error" | "off"
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn recognises_level_names() {
		assert!(is_valid_level("debug"));
		assert!(is_valid_level(" WARN "));
		assert!(!is_valid_level("loud"));
	}

	fn same_filter(actual: EnvFilter, expected: &str) {
		assert_eq!(actual.to_string(), EnvFilter::new(expected).to_string());
	}

	#[test]
	fn environment_directive_wins_over_configured_level() {
		same_filter(
			filter_from(Some("popmenu_core=trace"), Some("warn")),
			"popmenu_core=trace",
		);
	}

	#[test]
	fn configured_level_applies_without_environment() {
		same_filter(filter_from(None, Some("warn")), "warn");
		same_filter(filter_from(Some("  "), Some("error")), "error");
	}

	#[test]
	fn unparsable_directives_fall_back_to_default() {
		same_filter(filter_from(Some("popmenu=loud"), Some("warn")), "warn");
		same_filter(filter_from(None, Some("popmenu=loud")), DEFAULT_LEVEL);
		same_filter(filter_from(None, None), DEFAULT_LEVEL);
	}
}
