use ratatui::style::{Color, Modifier, Style};

/// Styles used to draw the picker and its host page.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	pub title: Style,
	pub muted: Style,
	pub border: Style,
	pub active_border: Style,
	pub cell: Style,
	pub highlight: Style,
	pub button: Style,
	pub disabled: Style,
	pub selection: Style,
}

impl Theme {
	#[must_use]
	pub fn title_style(&self) -> Style {
		self.title
	}

	#[must_use]
	pub fn muted_style(&self) -> Style {
		self.muted
	}

	#[must_use]
	pub fn border_style(&self, active: bool) -> Style {
		if active { self.active_border } else { self.border }
	}

	#[must_use]
	pub fn cell_style(&self, highlighted: bool) -> Style {
		if highlighted { self.highlight } else { self.cell }
	}

	#[must_use]
	pub fn button_style(&self, enabled: bool) -> Style {
		if enabled { self.button } else { self.disabled }
	}

	#[must_use]
	pub fn selection_style(&self) -> Style {
		self.selection
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

const SLATE: Theme = Theme {
	title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
	muted: Style::new().fg(Color::Gray),
	border: Style::new().fg(Color::DarkGray),
	active_border: Style::new().fg(Color::LightBlue),
	cell: Style::new().fg(Color::White),
	highlight: Style::new().fg(Color::Black).bg(Color::LightBlue),
	button: Style::new().fg(Color::White).bg(Color::DarkGray),
	disabled: Style::new().fg(Color::DarkGray),
	selection: Style::new().fg(Color::LightMagenta).add_modifier(Modifier::BOLD),
};

const LIGHT: Theme = Theme {
	title: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
	muted: Style::new().fg(Color::DarkGray),
	border: Style::new().fg(Color::Gray),
	active_border: Style::new().fg(Color::Blue),
	cell: Style::new().fg(Color::Black),
	highlight: Style::new().fg(Color::White).bg(Color::Blue),
	button: Style::new().fg(Color::Black).bg(Color::Gray),
	disabled: Style::new().fg(Color::Gray),
	selection: Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD),
};

const BUILTINS: &[ThemeDefinition] = &[
	ThemeDefinition {
		name: "slate",
		theme: SLATE,
		aliases: &["dark", "default"],
	},
	ThemeDefinition {
		name: "light",
		theme: LIGHT,
		aliases: &["paper"],
	},
];

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Names of the bundled themes, in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTINS.iter().map(|definition| definition.name)
}

/// Look a theme up by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	BUILTINS
		.iter()
		.find(|definition| {
			definition.name.eq_ignore_ascii_case(name)
				|| definition
					.aliases
					.iter()
					.any(|alias| alias.eq_ignore_ascii_case(name))
		})
		.map(|definition| definition.theme)
}
