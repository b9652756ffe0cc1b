use std::path::PathBuf;

use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// `[menu]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct MenuSection {
	pub(super) path: Option<PathBuf>,
	pub(super) placeholder: Option<String>,
	pub(super) nothing_found_message: Option<String>,
	pub(super) searchable: Option<bool>,
}

pub(super) struct MenuResolution {
	pub(super) path: Option<PathBuf>,
	pub(super) placeholder: Option<String>,
	pub(super) nothing_found_message: Option<String>,
	pub(super) searchable: Option<bool>,
}

impl MenuSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.menu.clone() {
			self.path = Some(path);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
		if let Some(message) = cli.nothing_found.clone() {
			self.nothing_found_message = Some(message);
		}
		if cli.no_search {
			self.searchable = Some(false);
		}
	}

	pub(super) fn finalize(self) -> MenuResolution {
		MenuResolution {
			path: self.path.filter(|path| !path.as_os_str().is_empty()),
			placeholder: non_blank(self.placeholder),
			nothing_found_message: non_blank(self.nothing_found_message),
			searchable: self.searchable,
		}
	}
}
