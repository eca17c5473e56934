//! Read-only icon catalog: an ordered mapping from icon name to vector
//! contents.
//!
//! The bundled Feather subset is parsed once per process and handed out as an
//! `Arc<IconCatalog>`, so every picker instance shares the same data. Catalogs
//! loaded from disk are validated and sanitized before they are accepted; see
//! [`IconCatalog::load`].

mod builtin;
mod error;
mod sanitize;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

pub use error::CatalogError;

/// View box shared by every Feather icon.
const VIEW_BOX: &str = "0 0 24 24";

/// Vector contents for a single icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconGlyph {
	/// Inner SVG markup, without the surrounding `<svg>` element.
	pub contents: String,
	/// Character drawn in place of the icon on a terminal grid.
	#[serde(default)]
	pub symbol: Option<String>,
}

impl IconGlyph {
	#[must_use]
	pub fn new(contents: impl Into<String>) -> Self {
		Self {
			contents: contents.into(),
			symbol: None,
		}
	}

	#[must_use]
	pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
		self.symbol = Some(symbol.into());
		self
	}
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
	name: String,
	#[serde(default)]
	symbol: Option<String>,
	contents: String,
}

/// Immutable, ordered collection of icons.
#[derive(Debug, Clone)]
pub struct IconCatalog {
	icons: IndexMap<String, IconGlyph>,
}

impl IconCatalog {
	/// The bundled Feather catalog.
	#[must_use]
	pub fn builtin() -> Arc<Self> {
		builtin::shared()
	}

	/// Build a catalog from trusted entries, keeping their order.
	pub fn from_entries<I, N>(entries: I) -> Result<Self, CatalogError>
	where
		I: IntoIterator<Item = (N, IconGlyph)>,
		N: Into<String>,
	{
		let mut icons = IndexMap::new();
		for (index, (name, glyph)) in entries.into_iter().enumerate() {
			let name = name.into();
			if name.trim().is_empty() {
				return Err(CatalogError::EmptyName { index });
			}
			sanitize::check_name(&name)?;
			match icons.entry(name) {
				Entry::Occupied(entry) => {
					return Err(CatalogError::DuplicateIcon {
						name: entry.key().clone(),
					});
				}
				Entry::Vacant(entry) => {
					entry.insert(glyph);
				}
			}
		}

		if icons.is_empty() {
			return Err(CatalogError::Empty);
		}
		Ok(Self { icons })
	}

	/// Parse a user-supplied catalog document.
	///
	/// The document is a JSON array of `{ "name", "contents", "symbol"? }`
	/// objects. Every entry is checked for markup that could execute code,
	/// and names are limited to the characters [`render`](Self::render) can
	/// splice into a class attribute.
	pub fn from_json(source: &str) -> Result<Self, CatalogError> {
		let entries = parse_entries(source)?;
		for entry in &entries {
			sanitize::check_markup(&entry.name, &entry.contents)?;
		}
		Self::from_catalog_entries(entries)
	}

	/// Read and parse a user-supplied catalog file.
	pub fn load(path: &Path) -> Result<Self, CatalogError> {
		let source = fs::read_to_string(path).map_err(|source| CatalogError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let catalog = Self::from_json(&source)?;
		log::info!(
			"loaded icon catalog from {} ({} icons)",
			path.display(),
			catalog.len()
		);
		Ok(catalog)
	}

	fn from_trusted_json(source: &str) -> Result<Self, CatalogError> {
		Self::from_catalog_entries(parse_entries(source)?)
	}

	fn from_catalog_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
		Self::from_entries(entries.into_iter().map(|entry| {
			let glyph = IconGlyph {
				contents: entry.contents,
				symbol: entry.symbol,
			};
			(entry.name, glyph)
		}))
	}

	/// Icon names in catalog order.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.icons.keys().map(String::as_str)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.icons.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.icons.is_empty()
	}

	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.icons.contains_key(name)
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<&IconGlyph> {
		self.icons.get(name)
	}

	/// Name stored at `index` in catalog order.
	#[must_use]
	pub fn name_at(&self, index: usize) -> Option<&str> {
		self.icons.get_index(index).map(|(name, _)| name.as_str())
	}

	/// Render `name` as a standalone SVG document of the requested size.
	pub fn render(&self, name: &str, width: f64, height: f64) -> Result<String, CatalogError> {
		let glyph = self.get(name).ok_or_else(|| CatalogError::UnknownIcon {
			name: name.to_string(),
		})?;
		Ok(format!(
			r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="{VIEW_BOX}" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-{name}">{contents}</svg>"#,
			contents = glyph.contents,
		))
	}
}

fn parse_entries(source: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
	Ok(serde_json::from_str(source)?)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	fn small_catalog() -> IconCatalog {
		IconCatalog::from_entries([
			("circle", IconGlyph::new(r#"<circle cx="12" cy="12" r="10"></circle>"#)),
			("minus", IconGlyph::new(r#"<line x1="5" y1="12" x2="19" y2="12"></line>"#)),
		])
		.unwrap()
	}

	#[test]
	fn render_wraps_contents_in_feather_svg() {
		let svg = small_catalog().render("circle", 24.0, 24.0).unwrap();
		assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24""#));
		assert!(svg.contains(r#"class="feather feather-circle""#));
		assert!(svg.contains(r#"<circle cx="12" cy="12" r="10"></circle></svg>"#));
	}

	#[test]
	fn render_keeps_fractional_sizes() {
		let svg = small_catalog().render("minus", 37.5, 36.0).unwrap();
		assert!(svg.contains(r#"width="37.5" height="36""#));
	}

	#[test]
	fn render_rejects_unknown_names() {
		let err = small_catalog().render("nope", 24.0, 24.0).unwrap_err();
		assert!(matches!(err, CatalogError::UnknownIcon { ref name } if name == "nope"));
	}

	#[test]
	fn names_follow_insertion_order() {
		let catalog = IconCatalog::from_entries([
			("zeta", IconGlyph::new("")),
			("alpha", IconGlyph::new("")),
		])
		.unwrap();
		assert_eq!(catalog.names().collect::<Vec<_>>(), ["zeta", "alpha"]);
		assert_eq!(catalog.name_at(1), Some("alpha"));
		assert_eq!(catalog.name_at(2), None);
	}

	#[test]
	fn duplicates_and_empty_names_are_rejected() {
		let duplicate =
			IconCatalog::from_entries([("a", IconGlyph::new("")), ("a", IconGlyph::new(""))]);
		assert!(matches!(duplicate, Err(CatalogError::DuplicateIcon { .. })));

		let unnamed = IconCatalog::from_entries([("a", IconGlyph::new("")), (" ", IconGlyph::new(""))]);
		assert!(matches!(unnamed, Err(CatalogError::EmptyName { index: 1 })));

		let empty = IconCatalog::from_entries(Vec::<(String, IconGlyph)>::new());
		assert!(matches!(empty, Err(CatalogError::Empty)));
	}

	#[test]
	fn names_cannot_break_out_of_the_class_attribute() {
		let source = r#"[
			{ "name": "x\" onload=\"alert(1)", "contents": "<path d=\"M0 0\"></path>" }
		]"#;
		let err = IconCatalog::from_json(source).unwrap_err();
		assert!(matches!(err, CatalogError::InvalidName { ref name } if name == r#"x" onload="alert(1)"#));

		let direct = IconCatalog::from_entries([("a b", IconGlyph::new(""))]);
		assert!(matches!(direct, Err(CatalogError::InvalidName { .. })));
	}

	#[test]
	fn glyph_symbols_are_kept() {
		let catalog = IconCatalog::from_entries([
			("plain", IconGlyph::new("<path></path>")),
			("star", IconGlyph::new("<path></path>").with_symbol("★")),
		])
		.unwrap();
		assert_eq!(catalog.get("star").unwrap().symbol.as_deref(), Some("★"));
		assert_eq!(catalog.get("plain").unwrap().symbol, None);
	}

	#[test]
	fn json_catalog_is_sanitized() {
		let source = r#"[
			{ "name": "ok", "contents": "<path d=\"M0 0\"></path>" },
			{ "name": "bad", "contents": "<script>alert(1)</script>" }
		]"#;
		let err = IconCatalog::from_json(source).unwrap_err();
		assert!(matches!(err, CatalogError::UnsafeMarkup { ref name, .. } if name == "bad"));
	}

	#[test]
	fn json_catalog_reads_symbols() {
		let source = r#"[{ "name": "star", "symbol": "*", "contents": "<polygon></polygon>" }]"#;
		let catalog = IconCatalog::from_json(source).unwrap();
		assert_eq!(catalog.get("star").unwrap().symbol.as_deref(), Some("*"));
	}

	#[test]
	fn load_reads_catalog_files() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"[{{ "name": "dot", "contents": "<circle r=\"1\"></circle>" }}]"#).unwrap();
		let catalog = IconCatalog::load(file.path()).unwrap();
		assert_eq!(catalog.names().collect::<Vec<_>>(), ["dot"]);
	}

	#[test]
	fn load_reports_missing_files() {
		let dir = tempfile::tempdir().unwrap();
		let err = IconCatalog::load(&dir.path().join("missing.json")).unwrap_err();
		assert!(matches!(err, CatalogError::Io { .. }));
		assert!(err.to_string().contains("missing.json"));
	}
}
