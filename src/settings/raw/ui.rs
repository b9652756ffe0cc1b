use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// `[ui]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) title: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<String>,
	pub(super) title: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
	}

	pub(super) fn finalize(self, default_title: String) -> UiResolution {
		UiResolution {
			theme: non_blank(self.theme),
			title: non_blank(self.title).unwrap_or(default_title),
		}
	}
}
