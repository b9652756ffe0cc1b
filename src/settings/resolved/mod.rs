use std::path::PathBuf;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Menu definition to load; the built-in menu when unset.
	pub menu_path: Option<PathBuf>,
	pub placeholder: Option<String>,
	pub nothing_found_message: Option<String>,
	/// Overrides the menu file's own `searchable` flag.
	pub searchable: Option<bool>,
	pub theme: Option<String>,
	pub title: String,
	pub log_level: Option<String>,
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
