use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading an [`IconCatalog`](super::IconCatalog) or
/// resolving names against it.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The requested name is not a key of the catalog.
	#[error("unknown icon '{name}'")]
	UnknownIcon { name: String },

	/// A catalog file could not be read.
	#[error("failed to read icon catalog {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A catalog document is not valid JSON or does not match the entry layout.
	#[error("failed to parse icon catalog: {0}")]
	Parse(#[from] serde_json::Error),

	/// A catalog must contain at least one icon.
	#[error("icon catalog is empty")]
	Empty,

	/// An entry was declared without a name.
	#[error("icon catalog entry {index} has an empty name")]
	EmptyName { index: usize },

	/// A name holds characters other than ASCII letters, digits, `-` and `_`.
	#[error("icon name '{name}' may only contain letters, digits, '-' and '_'")]
	InvalidName { name: String },

	/// Two entries share the same name.
	#[error("icon '{name}' appears more than once")]
	DuplicateIcon { name: String },

	/// A user-supplied entry carries markup that could run code when inserted
	/// into a display tree.
	#[error("icon '{name}' contains unsafe markup: {reason}")]
	UnsafeMarkup { name: String, reason: String },
}
