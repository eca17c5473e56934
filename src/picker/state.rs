/// Interactive state owned by one picker instance.
///
/// Only the transitions below mutate it; they keep `current_page` inside the
/// page range and reset both page and cursor whenever the filter changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerState {
	is_open: bool,
	search_term: String,
	current_page: usize,
	selected_icon: Option<String>,
	cursor: usize,
}

impl PickerState {
	#[must_use]
	pub fn is_open(&self) -> bool {
		self.is_open
	}

	#[must_use]
	pub fn search_term(&self) -> &str {
		&self.search_term
	}

	#[must_use]
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	#[must_use]
	pub fn selected_icon(&self) -> Option<&str> {
		self.selected_icon.as_deref()
	}

	/// Keyboard highlight within the current page.
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub(crate) fn set_open(&mut self, open: bool) {
		self.is_open = open;
	}

	pub(crate) fn set_search(&mut self, term: String) {
		self.search_term = term;
		self.current_page = 0;
		self.cursor = 0;
	}

	pub(crate) fn prev_page(&mut self) {
		let page = self.current_page.saturating_sub(1);
		self.go_to_page(page);
	}

	pub(crate) fn next_page(&mut self, total_pages: usize) {
		let last = total_pages.max(1) - 1;
		let page = (self.current_page + 1).min(last);
		self.go_to_page(page);
	}

	pub(crate) fn set_cursor(&mut self, cursor: usize) {
		self.cursor = cursor;
	}

	pub(crate) fn record_selection(&mut self, name: String) {
		self.selected_icon = Some(name);
	}

	fn go_to_page(&mut self, page: usize) {
		if page != self.current_page {
			self.current_page = page;
			self.cursor = 0;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_closed_and_empty() {
		let state = PickerState::default();
		assert!(!state.is_open());
		assert_eq!(state.search_term(), "");
		assert_eq!(state.current_page(), 0);
		assert_eq!(state.selected_icon(), None);
	}

	#[test]
	fn search_resets_page_and_cursor() {
		let mut state = PickerState::default();
		for _ in 0..3 {
			state.next_page(5);
		}
		state.set_cursor(4);
		assert_eq!(state.current_page(), 3);

		state.set_search("arrow".into());
		assert_eq!(state.current_page(), 0);
		assert_eq!(state.cursor(), 0);
		assert_eq!(state.search_term(), "arrow");
	}

	#[test]
	fn navigation_is_clamped() {
		let mut state = PickerState::default();
		state.prev_page();
		assert_eq!(state.current_page(), 0);

		state.next_page(2);
		state.next_page(2);
		assert_eq!(state.current_page(), 1);

		state.next_page(0);
		assert_eq!(state.current_page(), 0);
	}

	#[test]
	fn staying_on_a_page_keeps_the_cursor() {
		let mut state = PickerState::default();
		state.set_cursor(2);
		state.prev_page();
		assert_eq!(state.cursor(), 2);
		state.next_page(1);
		assert_eq!(state.cursor(), 2);
	}
}
