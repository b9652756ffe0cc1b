use std::path::PathBuf;

use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// `[logging]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

pub(super) struct LoggingResolution {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level {
			self.level = Some(level.as_str().to_string());
		}
	}

	pub(super) fn finalize(self) -> LoggingResolution {
		LoggingResolution {
			level: non_blank(self.level).map(|level| level.to_ascii_lowercase()),
			file: self.file,
		}
	}
}
