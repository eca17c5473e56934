use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use glyphpick::picker::PickerLayout;
use glyphpick::{HostPage, IconCatalog, PickOutcome};

use crate::settings::ResolvedConfig;

/// Session result together with the markup the CLI may print.
#[derive(Debug)]
pub(crate) struct PickReport {
	pub(crate) outcome: PickOutcome,
	pub(crate) svg: Option<String>,
}

/// Builds the host page from resolved settings and runs it.
pub(crate) struct PickWorkflow {
	catalog: Arc<IconCatalog>,
	layout: PickerLayout,
	page: HostPage,
}

impl PickWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			layout,
			catalog_path,
			theme,
			initial_query,
			start_open,
			..
		} = config;

		let catalog = load_catalog(catalog_path.as_deref())?;
		let mut page = HostPage::new(Arc::clone(&catalog), layout, theme)?;
		match initial_query {
			Some(query) => page.start_with_query(query),
			None if start_open => page.open_picker(),
			None => {}
		}

		Ok(Self {
			catalog,
			layout,
			page,
		})
	}

	pub(crate) fn catalog(&self) -> &IconCatalog {
		&self.catalog
	}

	pub(crate) fn run(self) -> Result<PickReport> {
		let Self {
			catalog,
			layout,
			page,
		} = self;
		let outcome = glyphpick::run(page)?;
		report_for(&catalog, &layout, outcome)
	}
}

fn load_catalog(path: Option<&Path>) -> Result<Arc<IconCatalog>> {
	match path {
		Some(path) => {
			let catalog = IconCatalog::load(path)
				.with_context(|| format!("failed to load icon catalog {}", path.display()))?;
			Ok(Arc::new(catalog))
		}
		None => Ok(IconCatalog::builtin()),
	}
}

/// Render the selected icon at the configured icon size.
fn report_for(
	catalog: &IconCatalog,
	layout: &PickerLayout,
	outcome: PickOutcome,
) -> Result<PickReport> {
	let svg = match (&outcome.icon, outcome.accepted) {
		(Some(name), true) => Some(catalog.render(name, layout.icon_width, layout.icon_height)?),
		_ => None,
	};
	Ok(PickReport { outcome, svg })
}
