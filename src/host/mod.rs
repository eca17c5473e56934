//! Demo host page that mounts a single picker and reports its selection.
//!
//! The page owns the pointer router, forwards terminal input to the picker,
//! and keeps its own copy of the selected name, written by the picker's
//! selection callback.

mod actions;
mod runtime;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Layout, Margin, Rect},
	text::Line,
	widgets::Paragraph,
};

use crate::catalog::IconCatalog;
use crate::picker::{
	ConfigError, IconPicker, PickerConfig, PickerLayout, PickerView, PointerRouter,
};
use crate::tui::{PickerHitMap, Theme, render_picker};

pub use runtime::run;

pub const PAGE_TITLE: &str = "Icon Picker";
pub const PAGE_SUBTITLE: &str = "Click the box below to open the icon picker";
pub const SELECTION_LABEL: &str = "Selected Icon";

/// Result of a host session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOutcome {
	/// `false` when the user aborted with Ctrl-C.
	pub accepted: bool,
	pub icon: Option<String>,
}

pub struct HostPage {
	picker: IconPicker,
	router: PointerRouter,
	theme: Theme,
	selection: Rc<RefCell<Option<String>>>,
	hits: PickerHitMap,
}

impl HostPage {
	pub fn new(
		catalog: Arc<IconCatalog>,
		layout: PickerLayout,
		theme: Theme,
	) -> Result<Self, ConfigError> {
		let selection = Rc::new(RefCell::new(None));
		let sink = Rc::clone(&selection);
		let config = PickerConfig::new(move |name: &str| {
			*sink.borrow_mut() = Some(name.to_string());
		})
		.with_layout(layout);
		let picker = IconPicker::new(catalog, config)?;

		Ok(Self {
			picker,
			router: PointerRouter::new(),
			theme,
			selection,
			hits: PickerHitMap::default(),
		})
	}

	#[must_use]
	pub fn picker(&self) -> &IconPicker {
		&self.picker
	}

	#[must_use]
	pub fn router(&self) -> &PointerRouter {
		&self.router
	}

	/// Hit regions from the most recent draw.
	#[must_use]
	pub fn hits(&self) -> &PickerHitMap {
		&self.hits
	}

	/// Name last reported through the selection callback.
	#[must_use]
	pub fn selected(&self) -> Option<String> {
		self.selection.borrow().clone()
	}

	pub fn open_picker(&mut self) {
		self.picker.open(&mut self.router);
	}

	/// Open the panel with `query` already typed into the search field.
	pub fn start_with_query(&mut self, query: impl Into<String>) {
		self.open_picker();
		self.picker.set_search(query);
	}

	pub(crate) fn outcome(&self, accepted: bool) -> PickOutcome {
		PickOutcome {
			accepted,
			icon: self.selected(),
		}
	}

	/// Draw the page around `view` and refresh the picker's boundary.
	pub fn draw(&mut self, frame: &mut Frame, view: &PickerView) {
		let area = frame.area().inner(Margin {
			vertical: 1,
			horizontal: 2,
		});
		let [title, subtitle, _, body] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(1),
		])
		.areas(area);

		frame.render_widget(
			Paragraph::new(PAGE_TITLE)
				.alignment(Alignment::Center)
				.style(self.theme.title_style()),
			title,
		);
		frame.render_widget(
			Paragraph::new(PAGE_SUBTITLE)
				.alignment(Alignment::Center)
				.style(self.theme.muted_style()),
			subtitle,
		);

		self.render_selection(frame, body);

		let hits = render_picker(frame, body, view, &self.theme);
		self.picker
			.set_boundary(&mut self.router, hits.boundary().to_vec());
		self.hits = hits;
	}

	fn render_selection(&self, frame: &mut Frame, body: Rect) {
		let Some(name) = self.selected() else {
			return;
		};
		let trigger = crate::tui::render::trigger_area(body);
		let y = trigger.bottom() + 1;
		if y + 2 > body.bottom() {
			return;
		}
		let area = Rect::new(body.x, y, body.width, 2);
		let lines = vec![
			Line::styled(SELECTION_LABEL, self.theme.muted_style()),
			Line::styled(name, self.theme.selection_style()),
		];
		frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
	}
}
