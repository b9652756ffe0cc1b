use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::LogLevelArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["popmenu"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.menu.is_none());
	assert!(!parsed.no_search);
}

#[test]
fn parses_menu_and_presentation_flags() {
	let parsed = CliArgs::parse_from([
		"popmenu",
		"-m",
		"menu.json",
		"--placeholder",
		"Filter",
		"--nothing-found",
		"No blocks",
		"--no-search",
		"--theme",
		"light",
		"--log-level",
		"debug",
		"-o",
		"json",
	]);
	assert_eq!(parsed.menu, Some(PathBuf::from("menu.json")));
	assert_eq!(parsed.placeholder.as_deref(), Some("Filter"));
	assert_eq!(parsed.nothing_found.as_deref(), Some("No blocks"));
	assert!(parsed.no_search);
	assert_eq!(parsed.theme.as_deref(), Some("light"));
	assert_eq!(parsed.log_level, Some(LogLevelArg::Debug));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn config_flag_appends() {
	let parsed = CliArgs::parse_from(["popmenu", "-c", "a.toml", "--config", "b.toml", "-n"]);
	assert_eq!(
		parsed.config,
		vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
	);
	assert!(parsed.no_config);
}
