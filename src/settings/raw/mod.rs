use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::util::default_title_for;
use crate::cli::CliArgs;

mod logging;
mod menu;
mod ui;

use logging::LoggingSection;
use menu::MenuSection;
use ui::UiSection;

/// Configuration as read from files and the environment, before CLI
/// overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	menu: MenuSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.menu.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Fill defaults and validate.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			menu_path: detect_source(
				cli.menu.is_some(),
				self.menu.path.is_some(),
				"POPMENU__MENU__PATH",
				"--menu",
				"menu.path",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"POPMENU__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"POPMENU__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let menu = self.menu.finalize();
		let ui = self
			.ui
			.finalize(default_title_for(menu.path.as_deref()));
		let logging = self.logging.finalize();

		let config = ResolvedConfig {
			menu_path: menu.path,
			placeholder: menu.placeholder,
			nothing_found_message: menu.nothing_found_message,
			searchable: menu.searchable,
			theme: ui.theme,
			title: ui.title,
			log_level: logging.level,
			log_file: logging.file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
