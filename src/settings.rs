use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use glyphpick::app_dirs;
use glyphpick::logging::{self, LevelFilter};
use glyphpick::picker::PickerLayout;
use glyphpick::tui::{self, Theme};

use crate::cli::CliArgs;

const ENV_PREFIX: &str = "glyphpick";
const DEFAULT_THEME: &str = "slate";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	picker: PickerSection,
	catalog: CatalogSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PickerSection {
	rows_per_page: Option<usize>,
	columns_per_page: Option<usize>,
	icon_width: Option<f64>,
	icon_height: Option<f64>,
	panel_width: Option<f64>,
	panel_height: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
	start_open: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	directory: Option<PathBuf>,
}

pub struct ResolvedConfig {
	pub layout: PickerLayout,
	pub catalog_path: Option<PathBuf>,
	pub theme_name: String,
	pub theme: Theme,
	pub initial_query: Option<String>,
	pub start_open: bool,
	pub log_level: LevelFilter,
	pub log_dir: Option<PathBuf>,
}

impl ResolvedConfig {
	/// Directory for the log file: the configured one, else the data dir.
	pub fn log_directory(&self) -> Result<PathBuf> {
		match &self.log_dir {
			Some(dir) => Ok(dir.clone()),
			None => app_dirs::get_data_dir(),
		}
	}

	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!(
			"  Grid: {} rows x {} columns",
			self.layout.rows_per_page, self.layout.columns_per_page
		);
		println!(
			"  Icon size: {}x{}",
			self.layout.icon_width, self.layout.icon_height
		);
		println!(
			"  Panel size: {}x{}",
			self.layout.panel_width, self.layout.panel_height
		);
		match &self.catalog_path {
			Some(path) => println!("  Catalog: {}", path.display()),
			None => println!("  Catalog: (bundled Feather icons)"),
		}
		println!("  UI theme: {}", self.theme_name);
		if let Some(query) = &self.initial_query {
			println!("  Initial query: {query}");
		}
		println!("  Start open: {}", bool_to_word(self.start_open));
		println!("  Log level: {}", self.log_level);
		if let Some(dir) = &self.log_dir {
			println!("  Log directory: {}", dir.display());
		}
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join("glyphpick.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.rows {
			self.picker.rows_per_page = Some(value);
		}
		if let Some(value) = cli.columns {
			self.picker.columns_per_page = Some(value);
		}
		if let Some(value) = cli.icon_width {
			self.picker.icon_width = Some(value);
		}
		if let Some(value) = cli.icon_height {
			self.picker.icon_height = Some(value);
		}
		if let Some(value) = cli.panel_width {
			self.picker.panel_width = Some(value);
		}
		if let Some(value) = cli.panel_height {
			self.picker.panel_height = Some(value);
		}

		if let Some(path) = cli.catalog.clone() {
			self.catalog.path = Some(path);
		}

		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(query) = cli.query.clone() {
			self.ui.initial_query = Some(query);
		}
		if cli.open {
			self.ui.start_open = Some(true);
		}

		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let defaults = PickerLayout::default();
		let layout = PickerLayout {
			rows_per_page: self.picker.rows_per_page.unwrap_or(defaults.rows_per_page),
			columns_per_page: self
				.picker
				.columns_per_page
				.unwrap_or(defaults.columns_per_page),
			icon_width: self.picker.icon_width.unwrap_or(defaults.icon_width),
			icon_height: self.picker.icon_height.unwrap_or(defaults.icon_height),
			panel_width: self.picker.panel_width.unwrap_or(defaults.panel_width),
			panel_height: self.picker.panel_height.unwrap_or(defaults.panel_height),
		};
		layout.validate().context("invalid [picker] configuration")?;

		let theme_name = self
			.ui
			.theme
			.map(|name| name.trim().to_string())
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let Some(theme) = tui::by_name(&theme_name) else {
			let known = tui::names().collect::<Vec<_>>().join(", ");
			bail!("unknown theme '{theme_name}' (available: {known})");
		};

		let initial_query = self.ui.initial_query.filter(|query| !query.is_empty());
		let start_open = initial_query.is_some() || self.ui.start_open.unwrap_or(false);

		let level = self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
		let log_level = logging::parse_level(level)?;

		Ok(ResolvedConfig {
			layout,
			catalog_path: self.catalog.path,
			theme_name,
			theme,
			initial_query,
			start_open,
			log_level,
			log_dir: self.logging.directory,
		})
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
