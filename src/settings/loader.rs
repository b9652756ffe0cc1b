use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn explicit_config_file_is_merged_under_cli_flags() {
		let dir = tempdir().unwrap();
		let menu = dir.path().join("menu.toml");
		fs::write(&menu, "[[items]]\ntitle = \"Delete\"\n").unwrap();
		let config = dir.path().join("popmenu.toml");
		fs::write(
			&config,
			format!(
				"[menu]\npath = {:?}\nplaceholder = \"Find\"\nsearchable = false\n\n[ui]\ntheme = \"solarized\"\n",
				menu.display().to_string()
			),
		)
		.unwrap();

		let cli = CliArgs::parse_from([
			"popmenu",
			"-n",
			"-c",
			config.to_str().unwrap(),
			"--theme",
			"light",
		]);
		let resolved = load(&cli).expect("resolves");

		assert_eq!(resolved.menu_path.as_deref(), Some(menu.as_path()));
		assert_eq!(resolved.placeholder.as_deref(), Some("Find"));
		assert_eq!(resolved.searchable, Some(false));
		assert_eq!(resolved.theme.as_deref(), Some("light"));
		assert_eq!(resolved.title, "menu");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from(["popmenu", "-n", "-c", missing.to_str().unwrap()]);
		assert!(load(&cli).is_err());
	}
}
