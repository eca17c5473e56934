use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use glyphpick::app_dirs;

use super::annotations::dim_cli_annotations;

/// Version banner including the resolved config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("glyphpick {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = tinted_cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn tinted_cli_command() -> Command {
	CliArgs::command().mut_args(dim_cli_annotations)
}

#[derive(Parser, Debug)]
#[command(
	name = "glyphpick",
	version,
	long_version = long_version(),
	about = "Pick an icon from a searchable, paginated grid",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "GLYPHPICK_CONFIG",
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
	#[arg(long, value_name = "NUM", help = "Grid rows per page (default: 6)")]
	pub(crate) rows: Option<usize>,
	#[arg(long, value_name = "NUM", help = "Grid columns per page (default: 6)")]
	pub(crate) columns: Option<usize>,
	#[arg(long = "icon-width", value_name = "PX", help = "Icon width in pixels (default: 24)")]
	pub(crate) icon_width: Option<f64>,
	#[arg(long = "icon-height", value_name = "PX", help = "Icon height in pixels (default: 24)")]
	pub(crate) icon_height: Option<f64>,
	#[arg(long = "panel-width", value_name = "PX", help = "Panel width in pixels (default: 500)")]
	pub(crate) panel_width: Option<f64>,
	#[arg(
		long = "panel-height",
		value_name = "PX",
		help = "Panel height in pixels (default: 500)"
	)]
	pub(crate) panel_height: Option<f64>,
	#[arg(
		long,
		value_name = "FILE",
		help = "Load icons from a JSON catalog (default: bundled Feather icons)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(long, value_name = "THEME", help = "Select a theme by name (default: slate)")]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "TEXT",
		help = "Start with the panel open and this search term (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(long, help = "Start with the panel open (default: disabled)")]
	pub(crate) open: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log file verbosity: off, error, warn, info, debug, trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(long = "list-icons", help = "List catalog icon names and exit (default: disabled)")]
	pub(crate) list_icons: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
	Svg,
}

#[cfg(test)]
pub(crate) fn parse_from<I, T>(args: I) -> CliArgs
where
	I: IntoIterator<Item = T>,
	T: Into<std::ffi::OsString> + Clone,
{
	let mut matches = tinted_cli_command().get_matches_from(args);
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn command_supports_custom_styles() {
		let command = tinted_cli_command();
		assert!(command.get_about().is_some());
		command.debug_assert();
	}

	#[test]
	fn defaults_to_plain_output() {
		let parsed = parse_from(["glyphpick"]);
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(!parsed.open);
		assert!(parsed.config.is_empty());
	}

	#[test]
	fn layout_flags_and_repeated_configs() {
		let parsed = parse_from([
			"glyphpick",
			"--rows",
			"4",
			"--icon-width",
			"32",
			"-c",
			"a.toml",
			"-c",
			"b.toml",
			"--output",
			"svg",
		]);
		assert_eq!(parsed.rows, Some(4));
		assert_eq!(parsed.icon_width, Some(32.0));
		assert_eq!(parsed.config.len(), 2);
		assert_eq!(parsed.output, OutputFormat::Svg);
	}
}
