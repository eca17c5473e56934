//! Resolve configuration and data directories for `glyphpick`.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "glyphpick";
const APPLICATION: &str = "glyphpick";

pub const CONFIG_DIR_ENV: &str = "GLYPHPICK_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "GLYPHPICK_DATA_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for glyphpick"))
}

/// An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}
