use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `popmenu` binary.
#[derive(Parser, Debug)]
#[command(
	name = "popmenu",
	version,
	long_version = long_version(),
	about = "Searchable nested popover menu for the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "POPMENU_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'm',
		long,
		value_name = "FILE",
		help = "Menu definition to open, TOML or JSON (default: built-in block menu)"
	)]
	pub(crate) menu: Option<PathBuf>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Placeholder shown in the empty search field (default: menu value)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "nothing-found",
		value_name = "TEXT",
		help = "Message shown when a search matches nothing (default: \"Nothing found\")"
	)]
	pub(crate) nothing_found: Option<String>,
	#[arg(
		long = "no-search",
		help = "Hide the search field (default: search enabled)"
	)]
	pub(crate) no_search: bool,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title of the background document (default: menu file name)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Log level written to the log file (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
