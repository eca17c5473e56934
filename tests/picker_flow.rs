use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use glyphpick::picker::pagination::filter_names;
use glyphpick::picker::{PickerView, TriggerView};
use glyphpick::{IconCatalog, IconPicker, PickerConfig, PointerRouter};

fn builtin_picker() -> (IconPicker, Rc<RefCell<Vec<String>>>) {
	let calls = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&calls);
	let config = PickerConfig::new(move |name| sink.borrow_mut().push(name.to_string()));
	let picker = IconPicker::new(IconCatalog::builtin(), config).unwrap();
	(picker, calls)
}

#[test]
fn every_filter_result_contains_the_term() {
	let catalog = IconCatalog::builtin();
	for term in ["", "arrow", "ARROW", "circle", "x", "zz-no-match"] {
		let filtered = filter_names(catalog.names(), term);
		if term.is_empty() {
			assert_eq!(filtered, catalog.names().collect::<Vec<_>>());
		}
		let needle = term.to_lowercase();
		assert!(filtered.iter().all(|name| name.to_lowercase().contains(&needle)));
	}
}

#[test]
fn bundled_arrow_search_fits_one_page() {
	let (mut picker, _) = builtin_picker();
	picker.next_page();
	picker.set_search("Arrow");

	let page = picker.page();
	assert_eq!(page.index, 0);
	assert_eq!(page.filtered_len, 10);
	assert_eq!(page.total_pages, 1);
}

#[test]
fn browse_search_select_round() {
	let mut router = PointerRouter::new();
	let (mut picker, calls) = builtin_picker();

	picker.open(&mut router);
	assert_eq!(router.len(), 1);
	picker.set_search("git");
	assert_eq!(picker.page().icons, ["git-branch", "github"]);

	picker.select("github", &mut router).unwrap();

	assert_eq!(*calls.borrow(), ["github"]);
	assert!(router.is_empty());
	let PickerView { trigger, panel } = picker.view().unwrap();
	assert!(panel.is_none());
	assert!(matches!(trigger, TriggerView::Icon(ref icon) if icon.name == "github"));

	picker.open(&mut router);
	assert_eq!(picker.search_term(), "git", "search survives a close");
}

#[test]
fn pickers_share_the_bundled_catalog() {
	let (first, _) = builtin_picker();
	let (second, _) = builtin_picker();
	assert!(std::ptr::eq(first.catalog(), second.catalog()));
	assert!(Arc::ptr_eq(&IconCatalog::builtin(), &IconCatalog::builtin()));
}

#[test]
fn random_pick_with_an_empty_filter_still_selects() {
	let mut router = PointerRouter::new();
	let (mut picker, calls) = builtin_picker();
	picker.open(&mut router);
	picker.set_search("zz-no-match");

	let name = picker.pick_random_thread(&mut router).unwrap();

	assert!(IconCatalog::builtin().contains(&name));
	assert_eq!(*calls.borrow(), [name]);
	assert!(!picker.is_open());
}
