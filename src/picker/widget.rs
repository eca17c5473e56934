use std::fmt;
use std::sync::Arc;

use rand::Rng;
use ratatui::layout::{Position, Rect};

use super::config::{ConfigError, PickerConfig, PickerLayout, SelectCallback};
use super::pagination::Page;
use super::pointer::{PointerRouter, SubscriptionId};
use super::state::PickerState;
use super::view::{
	FooterView, IconView, PanelView, PickerView, SEARCH_PLACEHOLDER, SearchView, TriggerView,
};
use crate::catalog::{CatalogError, IconCatalog};

/// Direction for keyboard movement across the icon grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
	Left,
	Right,
	Up,
	Down,
}

/// Icon picker widget: a trigger that opens a searchable, paginated grid.
pub struct IconPicker {
	catalog: Arc<IconCatalog>,
	layout: PickerLayout,
	on_select: SelectCallback,
	state: PickerState,
	subscription: Option<SubscriptionId>,
}

impl IconPicker {
	/// Mount a picker over `catalog`. Fails when the layout is unusable.
	pub fn new(catalog: Arc<IconCatalog>, config: PickerConfig) -> Result<Self, ConfigError> {
		let PickerConfig { layout, on_select } = config;
		if let Err(err) = layout.validate() {
			log::warn!("rejected picker layout: {err}");
			return Err(err);
		}

		Ok(Self {
			catalog,
			layout,
			on_select,
			state: PickerState::default(),
			subscription: None,
		})
	}

	#[must_use]
	pub fn catalog(&self) -> &IconCatalog {
		&self.catalog
	}

	#[must_use]
	pub fn layout(&self) -> &PickerLayout {
		&self.layout
	}

	#[must_use]
	pub fn state(&self) -> &PickerState {
		&self.state
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.state.is_open()
	}

	#[must_use]
	pub fn search_term(&self) -> &str {
		self.state.search_term()
	}

	#[must_use]
	pub fn current_page(&self) -> usize {
		self.state.current_page()
	}

	#[must_use]
	pub fn selected_icon(&self) -> Option<&str> {
		self.state.selected_icon()
	}

	/// Pointer subscription held while the panel is open.
	#[must_use]
	pub fn subscription(&self) -> Option<SubscriptionId> {
		self.subscription
	}

	/// The page currently on display.
	#[must_use]
	pub fn page(&self) -> Page<'_> {
		Page::compute(
			self.catalog.names(),
			self.state.search_term(),
			self.state.current_page(),
			self.layout.items_per_page(),
		)
	}

	/// Pages available for the active filter, at least one.
	#[must_use]
	pub fn total_pages(&self) -> usize {
		self.page().total_pages
	}

	/// Show the panel and start listening for outside presses.
	pub fn open(&mut self, router: &mut PointerRouter) {
		if self.state.is_open() {
			return;
		}
		self.state.set_open(true);
		self.subscription = Some(router.subscribe());
		log::debug!("picker opened");
	}

	/// Hide the panel. Search, page, and selection are left untouched.
	pub fn dismiss(&mut self, router: &mut PointerRouter) {
		if !self.state.is_open() {
			return;
		}
		self.state.set_open(false);
		if let Some(id) = self.subscription.take() {
			router.unsubscribe(id);
		}
		log::debug!("picker dismissed");
	}

	/// Replace the search term and return to the first page.
	pub fn set_search(&mut self, text: impl Into<String>) {
		self.state.set_search(text.into());
	}

	pub fn clear_search(&mut self) {
		self.set_search(String::new());
	}

	pub fn prev_page(&mut self) {
		self.state.prev_page();
	}

	pub fn next_page(&mut self) {
		let total = self.total_pages();
		self.state.next_page(total);
	}

	/// Select `name`, notify the host, and close the panel.
	///
	/// Unknown names leave the picker untouched and never reach the host.
	pub fn select(&mut self, name: &str, router: &mut PointerRouter) -> Result<(), CatalogError> {
		if !self.catalog.contains(name) {
			return Err(CatalogError::UnknownIcon {
				name: name.to_string(),
			});
		}
		self.commit_selection(name.to_string(), router);
		Ok(())
	}

	/// Select an icon drawn uniformly from the whole catalog, ignoring the
	/// active filter. Returns the chosen name.
	pub fn pick_random<R>(&mut self, rng: &mut R, router: &mut PointerRouter) -> Option<String>
	where
		R: Rng + ?Sized,
	{
		if self.catalog.is_empty() {
			return None;
		}
		let index = rng.gen_range(0..self.catalog.len());
		let name = self.catalog.name_at(index)?.to_string();
		self.commit_selection(name.clone(), router);
		Some(name)
	}

	/// [`pick_random`](Self::pick_random) with the thread-local generator.
	pub fn pick_random_thread(&mut self, router: &mut PointerRouter) -> Option<String> {
		self.pick_random(&mut rand::thread_rng(), router)
	}

	/// Name under the keyboard highlight, if the page has any cells.
	#[must_use]
	pub fn highlighted(&self) -> Option<&str> {
		let cursor = self.state.cursor();
		self.page().icons.get(cursor).copied()
	}

	/// Move the keyboard highlight, staying on the cells of the current page.
	pub fn move_cursor(&mut self, step: CursorMove) {
		let cells = self.page().icons.len();
		if cells == 0 {
			return;
		}
		let columns = self.layout.columns_per_page;
		let cursor = self.state.cursor().min(cells - 1);
		let next = match step {
			CursorMove::Left => cursor.saturating_sub(1),
			CursorMove::Right => (cursor + 1).min(cells - 1),
			CursorMove::Up if cursor >= columns => cursor - columns,
			CursorMove::Down if cursor + columns < cells => cursor + columns,
			CursorMove::Up | CursorMove::Down => cursor,
		};
		self.state.set_cursor(next);
	}

	/// Select the highlighted cell. Returns the name when one was selected.
	pub fn select_highlighted(
		&mut self,
		router: &mut PointerRouter,
	) -> Result<Option<String>, CatalogError> {
		let Some(name) = self.highlighted().map(str::to_string) else {
			return Ok(None);
		};
		self.select(&name, router)?;
		Ok(Some(name))
	}

	/// Record the regions this picker last rendered into.
	pub fn set_boundary(&self, router: &mut PointerRouter, regions: Vec<Rect>) {
		if let Some(id) = self.subscription {
			router.set_boundary(id, regions);
		}
	}

	/// Dismiss the picker when a press lands outside its boundary. Returns
	/// whether it was dismissed.
	pub fn handle_pointer_press(&mut self, position: Position, router: &mut PointerRouter) -> bool {
		let Some(id) = self.subscription else {
			return false;
		};
		if router.is_outside(id, position) {
			self.dismiss(router);
			return true;
		}
		false
	}

	/// Release the pointer subscription before dropping the picker.
	pub fn unmount(mut self, router: &mut PointerRouter) {
		self.dismiss(router);
	}

	/// Derive the trigger and, when open, the panel contents.
	pub fn view(&self) -> Result<PickerView, CatalogError> {
		let trigger = match self.state.selected_icon() {
			Some(name) => {
				let (width, height) = self.layout.trigger_icon_size();
				TriggerView::Icon(self.icon_view(name, width, height)?)
			}
			None => TriggerView::Placeholder,
		};

		let panel = if self.state.is_open() {
			Some(self.panel_view()?)
		} else {
			None
		};

		Ok(PickerView { trigger, panel })
	}

	fn panel_view(&self) -> Result<PanelView, CatalogError> {
		let page = self.page();
		let cells = page
			.icons
			.iter()
			.map(|name| self.icon_view(name, self.layout.icon_width, self.layout.icon_height))
			.collect::<Result<Vec<_>, _>>()?;
		let highlighted = (!cells.is_empty()).then(|| self.state.cursor().min(cells.len() - 1));
		let term = self.state.search_term();

		Ok(PanelView {
			width: self.layout.panel_width,
			height: self.layout.panel_height,
			search: SearchView {
				text: term.to_string(),
				placeholder: SEARCH_PLACEHOLDER,
				show_clear: !term.is_empty(),
			},
			columns: self.layout.columns_per_page,
			cells,
			highlighted,
			footer: FooterView {
				label: page.label(),
				show_prev: !page.is_first(),
				next_enabled: !page.is_last(),
			},
		})
	}

	fn icon_view(&self, name: &str, width: f64, height: f64) -> Result<IconView, CatalogError> {
		let markup = self.catalog.render(name, width, height)?;
		let symbol = self.catalog.get(name).and_then(|glyph| glyph.symbol.clone());
		Ok(IconView {
			name: name.to_string(),
			symbol,
			markup,
			width,
			height,
		})
	}

	fn commit_selection(&mut self, name: String, router: &mut PointerRouter) {
		log::info!("icon selected: {name}");
		self.state.record_selection(name.clone());
		(self.on_select)(&name);
		self.dismiss(router);
	}
}

impl fmt::Debug for IconPicker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("IconPicker")
			.field("layout", &self.layout)
			.field("state", &self.state)
			.field("subscription", &self.subscription)
			.field("catalog_len", &self.catalog.len())
			.finish_non_exhaustive()
	}
}

