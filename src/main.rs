mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain, print_svg};
use glyphpick::logging;
use settings::ResolvedConfig;
use workflow::PickWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in glyphpick::tui::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	init_logging(&resolved);

	let workflow = PickWorkflow::from_config(resolved)?;

	if cli.list_icons {
		for name in workflow.catalog().names() {
			println!("{name}");
		}
		return Ok(());
	}

	run_picker(cli.output, workflow)
}

/// A missing log file never stops the picker.
fn init_logging(settings: &ResolvedConfig) {
	let result = settings
		.log_directory()
		.and_then(|dir| logging::initialize(settings.log_level, &dir));
	if let Err(err) = result {
		eprintln!("glyphpick: logging disabled: {err:#}");
	}
}

/// Run the picker and print the result in the chosen format.
fn run_picker(format: OutputFormat, workflow: PickWorkflow) -> Result<()> {
	let report = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
		OutputFormat::Svg => print_svg(&report),
	}

	Ok(())
}
