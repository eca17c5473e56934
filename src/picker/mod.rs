//! The icon picker widget and the state it owns.
//!
//! [`IconPicker`] holds a shared [`IconCatalog`](crate::catalog::IconCatalog),
//! a validated [`PickerLayout`], and the host's selection callback. Every
//! interaction is a synchronous method call; drawing goes through
//! [`IconPicker::view`], which the [`tui`](crate::tui) module turns into
//! terminal output.

mod config;
pub mod pagination;
pub mod pointer;
mod state;
mod view;
mod widget;

pub use config::{
	ConfigError, DEFAULT_COLUMNS_PER_PAGE, DEFAULT_ICON_SIZE, DEFAULT_PANEL_SIZE,
	DEFAULT_ROWS_PER_PAGE, PickerConfig, PickerLayout, SelectCallback, TRIGGER_SCALE,
};
pub use pagination::Page;
pub use pointer::{PointerRouter, SubscriptionId};
pub use state::PickerState;
pub use view::{
	FooterView, IconView, PanelView, PickerView, SEARCH_PLACEHOLDER, SearchView,
	TRIGGER_PLACEHOLDER, TriggerView,
};
pub use widget::{CursorMove, IconPicker};
