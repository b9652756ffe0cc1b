mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use popmenu::logging;
use settings::ResolvedConfig;
use workflow::MenuWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in popmenu::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let _logging = logging::initialize(resolved.log_level.as_deref(), resolved.log_file.as_deref());

	run_menu(cli.output, resolved)
}

/// Run the popover and print the outcome in the chosen format.
fn run_menu(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = MenuWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
