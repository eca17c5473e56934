//! File logging. The terminal belongs to the UI while it runs, so records are
//! written to a log file in the data directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
pub use simplelog::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

pub const LOG_FILE_NAME: &str = "glyphpick.log";

/// Parse a level name such as `info` or `off`.
pub fn parse_level(value: &str) -> Result<LevelFilter> {
	value
		.trim()
		.parse()
		.with_context(|| format!("unknown log level {value:?}"))
}

/// Install the global logger, appending to `glyphpick.log` under `dir`.
///
/// Returns the log file path, or `None` when `level` is `off`.
pub fn initialize(level: LevelFilter, dir: &Path) -> Result<Option<PathBuf>> {
	if level == LevelFilter::Off {
		return Ok(None);
	}

	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE_NAME);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let config = ConfigBuilder::new()
		.set_target_level(LevelFilter::Error)
		.build();
	WriteLogger::init(level, config, file).context("a global logger is already installed")?;
	log::debug!("logging to {}", path.display());
	Ok(Some(path))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn levels_parse_case_insensitively() {
		assert_eq!(parse_level("INFO").unwrap(), LevelFilter::Info);
		assert_eq!(parse_level(" off ").unwrap(), LevelFilter::Off);
		assert!(parse_level("loud").is_err());
	}

	#[test]
	fn off_skips_the_log_file() {
		let dir = tempfile::tempdir().unwrap();
		assert_eq!(initialize(LevelFilter::Off, dir.path()).unwrap(), None);
		assert!(!dir.path().join(LOG_FILE_NAME).exists());
	}
}
