use popmenu::{logging, theme};

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(name) = config.theme.as_deref()
		&& theme::by_name(name).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			name,
			sources.source_for_theme(),
			format!("unknown theme, expected one of: {}", theme::names().join(", ")),
		));
	}

	if let Some(path) = config.menu_path.as_deref()
		&& !path.is_file()
	{
		return Err(ConfigError::invalid(
			"menu.path",
			path.display().to_string(),
			sources.source_for_menu_path(),
			"menu file does not exist",
		));
	}

	if let Some(level) = config.log_level.as_deref()
		&& !logging::is_valid_level(level)
	{
		return Err(ConfigError::invalid(
			"logging.level",
			level,
			sources.source_for_log_level(),
			"expected trace, debug, info, warn, error or off",
		));
	}

	Ok(())
}
