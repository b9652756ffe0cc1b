use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::tempdir;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"popmenu",
		"--menu",
		"blocks.toml",
		"--placeholder",
		"Filter",
		"--nothing-found",
		"Nope",
		"--no-search",
		"--theme",
		"light",
		"--title",
		"Notes",
		"--log-level",
		"trace",
	]);

	let mut config = RawConfig::default();
	config.menu.searchable = Some(true);
	config.ui.theme = Some("solarized".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.menu.path, Some(PathBuf::from("blocks.toml")));
	assert_eq!(config.menu.placeholder.as_deref(), Some("Filter"));
	assert_eq!(config.menu.nothing_found_message.as_deref(), Some("Nope"));
	assert_eq!(config.menu.searchable, Some(false));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.ui.title.as_deref(), Some("Notes"));
	assert_eq!(config.logging.level.as_deref(), Some("trace"));
}

#[test]
fn resolve_fills_title_from_menu_file() {
	let dir = tempdir().unwrap();
	let menu = dir.path().join("blocks.json");
	fs::write(&menu, r#"{"items": [{"title": "Delete"}]}"#).unwrap();

	let cli = CliArgs::parse_from(["popmenu"]);
	let mut config = RawConfig::default();
	config.menu.path = Some(menu.clone());
	config.menu.placeholder = Some("   ".into());

	let resolved = config.resolve(&cli).expect("valid");
	assert_eq!(resolved.title, "blocks");
	assert_eq!(resolved.menu_path, Some(menu));
	assert_eq!(resolved.placeholder, None);
}

#[test]
fn resolve_reports_cli_flag_for_unknown_theme() {
	let cli = CliArgs::parse_from(["popmenu", "--theme", "neon"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("CLI flag `--theme`"));
	assert!(message.contains("neon"));
}
