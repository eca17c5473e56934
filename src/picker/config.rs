use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ROWS_PER_PAGE: usize = 6;
pub const DEFAULT_COLUMNS_PER_PAGE: usize = 6;
pub const DEFAULT_ICON_SIZE: f64 = 24.0;
pub const DEFAULT_PANEL_SIZE: f64 = 500.0;

/// Scale applied to the icon dimensions when the selection is shown on the
/// trigger.
pub const TRIGGER_SCALE: f64 = 1.5;

/// A layout value that cannot produce a usable grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
	#[error("invalid value for {field}: {reason} (value: {value})")]
	Invalid {
		field: &'static str,
		value: String,
		reason: &'static str,
	},
}

impl ConfigError {
	fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
		Self::Invalid {
			field,
			value: value.to_string(),
			reason,
		}
	}
}

/// Grid and sizing options for one picker instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerLayout {
	pub rows_per_page: usize,
	pub columns_per_page: usize,
	pub icon_width: f64,
	pub icon_height: f64,
	pub panel_width: f64,
	pub panel_height: f64,
}

impl Default for PickerLayout {
	fn default() -> Self {
		Self {
			rows_per_page: DEFAULT_ROWS_PER_PAGE,
			columns_per_page: DEFAULT_COLUMNS_PER_PAGE,
			icon_width: DEFAULT_ICON_SIZE,
			icon_height: DEFAULT_ICON_SIZE,
			panel_width: DEFAULT_PANEL_SIZE,
			panel_height: DEFAULT_PANEL_SIZE,
		}
	}
}

impl PickerLayout {
	/// Number of grid cells on one page.
	#[must_use]
	pub fn items_per_page(&self) -> usize {
		self.rows_per_page.saturating_mul(self.columns_per_page)
	}

	/// Dimensions used when the selected icon is drawn on the trigger.
	#[must_use]
	pub fn trigger_icon_size(&self) -> (f64, f64) {
		(self.icon_width * TRIGGER_SCALE, self.icon_height * TRIGGER_SCALE)
	}

	/// Check every field against its constraint.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.rows_per_page == 0 {
			return Err(ConfigError::invalid(
				"rows_per_page",
				self.rows_per_page,
				"must be greater than zero",
			));
		}
		if self.columns_per_page == 0 {
			return Err(ConfigError::invalid(
				"columns_per_page",
				self.columns_per_page,
				"must be greater than zero",
			));
		}
		if self.rows_per_page.checked_mul(self.columns_per_page).is_none() {
			return Err(ConfigError::invalid(
				"rows_per_page",
				self.rows_per_page,
				"rows times columns overflows the page size",
			));
		}

		for (field, value) in [
			("icon_width", self.icon_width),
			("icon_height", self.icon_height),
			("panel_width", self.panel_width),
			("panel_height", self.panel_height),
		] {
			if !value.is_finite() || value <= 0.0 {
				return Err(ConfigError::invalid(
					field,
					value,
					"must be a finite number greater than zero",
				));
			}
		}

		Ok(())
	}
}

/// Callback the widget invokes with the selected icon name.
pub type SelectCallback = Box<dyn FnMut(&str)>;

/// Everything a host supplies when mounting a picker.
pub struct PickerConfig {
	pub layout: PickerLayout,
	pub(crate) on_select: SelectCallback,
}

impl PickerConfig {
	/// Default layout with the mandatory selection callback.
	pub fn new(on_select: impl FnMut(&str) + 'static) -> Self {
		Self {
			layout: PickerLayout::default(),
			on_select: Box::new(on_select),
		}
	}

	#[must_use]
	pub fn with_layout(mut self, layout: PickerLayout) -> Self {
		self.layout = layout;
		self
	}

	#[must_use]
	pub fn rows_per_page(mut self, rows: usize) -> Self {
		self.layout.rows_per_page = rows;
		self
	}

	#[must_use]
	pub fn columns_per_page(mut self, columns: usize) -> Self {
		self.layout.columns_per_page = columns;
		self
	}

	#[must_use]
	pub fn icon_size(mut self, width: f64, height: f64) -> Self {
		self.layout.icon_width = width;
		self.layout.icon_height = height;
		self
	}

	#[must_use]
	pub fn panel_size(mut self, width: f64, height: f64) -> Self {
		self.layout.panel_width = width;
		self.layout.panel_height = height;
		self
	}
}

impl fmt::Debug for PickerConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PickerConfig")
			.field("layout", &self.layout)
			.finish_non_exhaustive()
	}
}
