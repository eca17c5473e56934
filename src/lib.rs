//! Icon picker widget for terminal interfaces.
//!
//! A host mounts an [`IconPicker`] over a shared [`IconCatalog`], receives
//! the chosen name through a callback, and draws the picker with
//! [`tui::render_picker`]. The [`host`] module provides a complete demo page
//! and event loop on top of that.

pub mod app_dirs;
pub mod catalog;
pub mod host;
pub mod logging;
pub mod picker;
pub mod tui;

pub use catalog::{CatalogError, IconCatalog, IconGlyph};
pub use host::{HostPage, PickOutcome, run};
pub use picker::{
	ConfigError, CursorMove, IconPicker, PickerConfig, PickerLayout, PickerView, PointerRouter,
};
pub use tui::{Theme, default_theme};
