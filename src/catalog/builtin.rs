use std::sync::{Arc, LazyLock};

use super::IconCatalog;

/// Feather icon subset bundled with the binary.
const FEATHER_JSON: &str = include_str!("../../assets/feather.json");

static BUILTIN: LazyLock<Arc<IconCatalog>> = LazyLock::new(|| {
	let catalog = IconCatalog::from_trusted_json(FEATHER_JSON)
		.expect("bundled icon catalog must parse successfully");
	log::debug!("loaded bundled icon catalog with {} icons", catalog.len());
	Arc::new(catalog)
});

/// Shared handle to the bundled catalog. Parsed on first use.
pub(super) fn shared() -> Arc<IconCatalog> {
	Arc::clone(&BUILTIN)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_catalog_is_sorted_and_complete() {
		let catalog = shared();
		assert_eq!(catalog.len(), 64);
		let names: Vec<&str> = catalog.names().collect();
		let mut sorted = names.clone();
		sorted.sort_unstable();
		assert_eq!(names, sorted);
		assert!(catalog.contains("github"));
		assert!(catalog.contains("shuffle"));
	}

	#[test]
	fn every_bundled_icon_has_a_symbol() {
		let catalog = shared();
		for name in catalog.names() {
			let glyph = catalog.get(name).unwrap();
			assert!(glyph.symbol.is_some(), "{name} should carry a terminal symbol");
			assert!(!glyph.contents.is_empty(), "{name} should carry svg contents");
		}
	}

	#[test]
	fn handles_share_one_catalog() {
		assert!(Arc::ptr_eq(&shared(), &shared()));
	}
}
