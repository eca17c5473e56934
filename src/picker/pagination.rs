//! Case-insensitive filtering and page slicing over catalog names.

/// Whether `name` contains the already-lowercased `needle`.
fn matches(name: &str, needle: &str) -> bool {
	needle.is_empty() || name.to_lowercase().contains(needle)
}

/// Keep the names containing `term`, ignoring case, in their original order.
pub fn filter_names<'a, I>(names: I, term: &str) -> Vec<&'a str>
where
	I: IntoIterator<Item = &'a str>,
{
	let needle = term.to_lowercase();
	names.into_iter().filter(|name| matches(name, &needle)).collect()
}

/// Number of pages needed for `len` items, never less than one.
///
/// An empty result set still shows a single empty page.
#[must_use]
pub fn page_count(len: usize, items_per_page: usize) -> usize {
	len.div_ceil(items_per_page.max(1)).max(1)
}

/// One page of filtered icon names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
	pub icons: Vec<&'a str>,
	/// Zero-based index of this page.
	pub index: usize,
	/// Total pages for the current filter, at least one.
	pub total_pages: usize,
	/// Size of the filtered set across every page.
	pub filtered_len: usize,
}

impl<'a> Page<'a> {
	/// Filter `names` by `term` and slice out page `index`.
	pub fn compute<I>(names: I, term: &str, index: usize, items_per_page: usize) -> Self
	where
		I: IntoIterator<Item = &'a str>,
	{
		let items_per_page = items_per_page.max(1);
		let filtered = filter_names(names, term);
		let filtered_len = filtered.len();
		let icons = filtered
			.into_iter()
			.skip(index.saturating_mul(items_per_page))
			.take(items_per_page)
			.collect();

		Self {
			icons,
			index,
			total_pages: page_count(filtered_len, items_per_page),
			filtered_len,
		}
	}

	#[must_use]
	pub fn is_first(&self) -> bool {
		self.index == 0
	}

	#[must_use]
	pub fn is_last(&self) -> bool {
		self.index + 1 >= self.total_pages
	}

	/// Footer text, e.g. `Page 1 of 2`.
	#[must_use]
	pub fn label(&self) -> String {
		format!("Page {} of {}", self.index + 1, self.total_pages)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn numbered(count: usize) -> Vec<String> {
		(0..count).map(|index| format!("icon-{index:02}")).collect()
	}

	#[test]
	fn empty_term_keeps_every_name() {
		let names = ["Alpha", "beta", "Gamma"];
		assert_eq!(filter_names(names, ""), names);
	}

	#[test]
	fn filtering_ignores_case_both_ways() {
		let names = ["Arrow-Up", "arrow-down", "circle", "ZARROWZ"];
		assert_eq!(filter_names(names, "ARROW"), ["Arrow-Up", "arrow-down", "ZARROWZ"]);
		assert_eq!(filter_names(names, "rrow-u"), ["Arrow-Up"]);
	}

	#[test]
	fn every_kept_name_contains_the_term() {
		let names = numbered(120);
		for term in ["1", "icon-0", "ICON", "9", "x"] {
			let needle = term.to_lowercase();
			for name in filter_names(names.iter().map(String::as_str), term) {
				assert!(name.to_lowercase().contains(&needle));
			}
		}
	}

	#[test]
	fn forty_icons_split_into_two_pages() {
		let names = numbered(40);
		let first = Page::compute(names.iter().map(String::as_str), "", 0, 36);
		assert_eq!(first.total_pages, 2);
		assert_eq!(first.icons.len(), 36);
		assert!(first.is_first());
		assert!(!first.is_last());

		let second = Page::compute(names.iter().map(String::as_str), "", 1, 36);
		assert_eq!(second.icons, ["icon-36", "icon-37", "icon-38", "icon-39"]);
		assert!(second.is_last());
		insta::assert_snapshot!(second.label(), @"Page 2 of 2");
	}

	#[test]
	fn no_matches_still_shows_one_page() {
		let names = numbered(5);
		let page = Page::compute(names.iter().map(String::as_str), "zz-no-match", 0, 4);
		assert!(page.icons.is_empty());
		assert_eq!(page.total_pages, 1);
		assert_eq!(page.filtered_len, 0);
		assert!(page.is_first() && page.is_last());
		insta::assert_snapshot!(page.label(), @"Page 1 of 1");
	}

	#[test]
	fn page_count_rounds_up() {
		assert_eq!(page_count(0, 36), 1);
		assert_eq!(page_count(36, 36), 1);
		assert_eq!(page_count(37, 36), 2);
		assert_eq!(page_count(72, 36), 2);
	}
}
