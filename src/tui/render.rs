use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Layout, Position, Rect},
	text::{Line, Span},
	widgets::{Block, BorderType, Clear, Paragraph},
};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use crate::picker::{
	FooterView, IconView, PanelView, PickerView, SearchView, TRIGGER_PLACEHOLDER, TriggerView,
};

/// Approximate pixel size of one terminal cell, used to map layout sizes.
pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;
/// Edge length of the square trigger box.
pub const TRIGGER_SIZE_PX: f64 = 100.0;

const HEADER_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 5;
const FOOTER_BUTTON_WIDTH: u16 = 12;
const FALLBACK_SYMBOL: &str = "•";
const EMPTY_GRID_MESSAGE: &str = "No icons found";

/// Terminal columns needed for `px` horizontal pixels.
#[must_use]
pub fn columns_for(px: f64) -> u16 {
	cells_for(px, CELL_WIDTH_PX)
}

/// Terminal rows needed for `px` vertical pixels.
#[must_use]
pub fn rows_for(px: f64) -> u16 {
	cells_for(px, CELL_HEIGHT_PX)
}

fn cells_for(px: f64, cell: f64) -> u16 {
	(px / cell).ceil().clamp(1.0, f64::from(u16::MAX)) as u16
}

/// What a pointer press at some position would activate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
	Trigger,
	Panel,
	SearchField,
	ClearSearch,
	Random,
	Close,
	PrevPage,
	NextPage,
	Icon(String),
}

/// Interactive regions produced by the last draw.
#[derive(Debug, Clone, Default)]
pub struct PickerHitMap {
	regions: Vec<(Rect, HitTarget)>,
	boundary: Vec<Rect>,
}

impl PickerHitMap {
	fn push(&mut self, rect: Rect, target: HitTarget) {
		if !rect.is_empty() {
			self.regions.push((rect, target));
		}
	}

	/// The most specific target under `position`.
	#[must_use]
	pub fn target_at(&self, position: Position) -> Option<&HitTarget> {
		self.regions
			.iter()
			.rev()
			.find(|(rect, _)| rect.contains(position))
			.map(|(_, target)| target)
	}

	/// Region occupied by `target`, if it was drawn.
	#[must_use]
	pub fn rect_of(&self, target: &HitTarget) -> Option<Rect> {
		self.regions
			.iter()
			.find(|(_, candidate)| candidate == target)
			.map(|(rect, _)| *rect)
	}

	/// Outer regions of the trigger and panel, for outside-press detection.
	#[must_use]
	pub fn boundary(&self) -> &[Rect] {
		&self.boundary
	}
}

/// Position of the trigger box: centred along the top edge of `area`.
#[must_use]
pub fn trigger_area(area: Rect) -> Rect {
	let width = columns_for(TRIGGER_SIZE_PX).min(area.width);
	let height = rows_for(TRIGGER_SIZE_PX).min(area.height);
	Rect::new(area.x + (area.width - width) / 2, area.y, width, height)
}

/// Draw the picker into `area` and return its interactive regions.
pub fn render_picker(
	frame: &mut Frame,
	area: Rect,
	view: &PickerView,
	theme: &Theme,
) -> PickerHitMap {
	let mut hits = PickerHitMap::default();

	let trigger = trigger_area(area);
	render_trigger(frame, trigger, &view.trigger, view.panel.is_some(), theme);
	hits.push(trigger, HitTarget::Trigger);
	hits.boundary.push(trigger);

	if let Some(panel) = &view.panel {
		let panel_rect = panel_area(area, trigger, panel);
		hits.boundary.push(panel_rect);
		render_panel(frame, panel_rect, panel, theme, &mut hits);
	}

	hits
}

fn panel_area(area: Rect, trigger: Rect, panel: &PanelView) -> Rect {
	let width = columns_for(panel.width).min(area.width);
	let height = rows_for(panel.height).min(area.height);
	let x = area.x + (area.width - width) / 2;
	let mut y = trigger.bottom();
	if y + height > area.bottom() {
		y = area.bottom().saturating_sub(height).max(area.y);
	}
	Rect::new(x, y, width, height)
}

fn render_trigger(frame: &mut Frame, area: Rect, trigger: &TriggerView, open: bool, theme: &Theme) {
	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.border_style(open));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let lines = match trigger {
		TriggerView::Placeholder => vec![Line::styled(TRIGGER_PLACEHOLDER, theme.muted_style())],
		TriggerView::Icon(icon) => {
			let width = usize::from(inner.width);
			let (name, _) = icon.name.unicode_truncate(width);
			vec![
				Line::styled(symbol_for(icon).to_string(), theme.selection_style()),
				Line::raw(name.to_string()),
				Line::styled(format!("{}×{}", icon.width, icon.height), theme.muted_style()),
			]
		}
	};

	let padding = inner.height.saturating_sub(lines.len() as u16) / 2;
	let body = Rect {
		y: inner.y + padding,
		height: inner.height - padding,
		..inner
	};
	frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
}

fn render_panel(
	frame: &mut Frame,
	area: Rect,
	panel: &PanelView,
	theme: &Theme,
	hits: &mut PickerHitMap,
) {
	frame.render_widget(Clear, area);
	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.border_style(true));
	let inner = block.inner(area);
	frame.render_widget(block, area);
	hits.push(area, HitTarget::Panel);

	let [header, grid, footer] = Layout::vertical([
		Constraint::Length(HEADER_HEIGHT),
		Constraint::Min(1),
		Constraint::Length(1),
	])
	.areas(inner);

	render_header(frame, header, &panel.search, theme, hits);
	render_grid(frame, grid, panel, theme, hits);
	render_footer(frame, footer, &panel.footer, theme, hits);
}

fn render_header(
	frame: &mut Frame,
	area: Rect,
	search: &SearchView,
	theme: &Theme,
	hits: &mut PickerHitMap,
) {
	let [field, random, close] = Layout::horizontal([
		Constraint::Min(8),
		Constraint::Length(BUTTON_WIDTH),
		Constraint::Length(BUTTON_WIDTH),
	])
	.areas(area);

	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.border_style(true));
	let inner = block.inner(field);
	frame.render_widget(block, field);
	hits.push(field, HitTarget::SearchField);

	let prompt = Span::styled("⌕ ", theme.muted_style());
	let text = if search.text.is_empty() {
		Span::styled(search.placeholder, theme.muted_style())
	} else {
		Span::raw(search.text.as_str())
	};
	frame.render_widget(Paragraph::new(Line::from(vec![prompt, text])), inner);

	if search.show_clear && inner.width > 2 {
		let clear = Rect::new(inner.right() - 2, inner.y, 2, 1);
		frame.render_widget(Paragraph::new("⊗").style(theme.button_style(true)), clear);
		hits.push(clear, HitTarget::ClearSearch);
	}

	if inner.width > 0 && inner.height > 0 {
		let text_width = u16::try_from(search.text.width()).unwrap_or(u16::MAX);
		let x = inner
			.x
			.saturating_add(2)
			.saturating_add(text_width)
			.min(inner.right() - 1);
		frame.set_cursor_position(Position::new(x, inner.y));
	}

	render_button(frame, random, "⤮", true, theme);
	hits.push(random, HitTarget::Random);
	render_button(frame, close, "✕", true, theme);
	hits.push(close, HitTarget::Close);
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, enabled: bool, theme: &Theme) {
	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.border_style(false));
	let inner = block.inner(area);
	frame.render_widget(block, area);
	frame.render_widget(
		Paragraph::new(label)
			.alignment(Alignment::Center)
			.style(theme.button_style(enabled)),
		inner,
	);
}

fn render_grid(
	frame: &mut Frame,
	area: Rect,
	panel: &PanelView,
	theme: &Theme,
	hits: &mut PickerHitMap,
) {
	if panel.cells.is_empty() {
		let message = Paragraph::new(EMPTY_GRID_MESSAGE)
			.alignment(Alignment::Center)
			.style(theme.muted_style());
		frame.render_widget(message, area);
		return;
	}

	let columns = panel.columns.max(1);
	let column_width = (area.width / columns.min(usize::from(u16::MAX)) as u16).max(1);
	let rows_needed = panel.cells.len().div_ceil(columns);
	let row_height: u16 = if usize::from(area.height) >= rows_needed * 2 {
		2
	} else {
		1
	};

	for (index, cell) in panel.cells.iter().enumerate() {
		let row = (index / columns) as u16;
		let column = (index % columns) as u16;
		let y = area.y + row * row_height;
		if y >= area.bottom() {
			break;
		}
		let x = area.x + column * column_width;
		if x >= area.right() {
			continue;
		}
		let rect = Rect::new(x, y, column_width.min(area.right() - x), 1);

		let label = format!("{} {}", symbol_for(cell), cell.name);
		let (label, _) = label.unicode_truncate(usize::from(rect.width.saturating_sub(1)));
		let highlighted = panel.highlighted == Some(index);
		frame.render_widget(
			Paragraph::new(label.to_string()).style(theme.cell_style(highlighted)),
			rect,
		);
		hits.push(rect, HitTarget::Icon(cell.name.clone()));
	}
}

fn render_footer(
	frame: &mut Frame,
	area: Rect,
	footer: &FooterView,
	theme: &Theme,
	hits: &mut PickerHitMap,
) {
	let [prev, label, next] = Layout::horizontal([
		Constraint::Length(FOOTER_BUTTON_WIDTH),
		Constraint::Min(1),
		Constraint::Length(FOOTER_BUTTON_WIDTH),
	])
	.areas(area);

	if footer.show_prev {
		frame.render_widget(
			Paragraph::new("‹ Previous").style(theme.button_style(true)),
			prev,
		);
		hits.push(prev, HitTarget::PrevPage);
	}

	frame.render_widget(
		Paragraph::new(footer.label.as_str())
			.alignment(Alignment::Center)
			.style(theme.muted_style()),
		label,
	);

	frame.render_widget(
		Paragraph::new("Next ›")
			.alignment(Alignment::Right)
			.style(theme.button_style(footer.next_enabled)),
		next,
	);
	if footer.next_enabled {
		hits.push(next, HitTarget::NextPage);
	}
}

fn symbol_for(icon: &IconView) -> &str {
	icon.symbol.as_deref().unwrap_or(FALLBACK_SYMBOL)
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::*;
	use crate::catalog::IconCatalog;
	use crate::picker::{IconPicker, PickerConfig, PointerRouter};

	fn draw(picker: &IconPicker, width: u16, height: u16) -> (String, PickerHitMap) {
		let view = picker.view().unwrap();
		let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
		let mut hits = PickerHitMap::default();
		terminal
			.draw(|frame| {
				let area = frame.area();
				hits = render_picker(frame, area, &view, &Theme::default());
			})
			.unwrap();
		(terminal.backend().to_string(), hits)
	}

	#[test]
	fn pixel_sizes_map_to_cells() {
		assert_eq!(columns_for(500.0), 63);
		assert_eq!(rows_for(500.0), 32);
		assert_eq!(columns_for(1.0), 1);
		assert_eq!(rows_for(TRIGGER_SIZE_PX), 7);
	}

	#[test]
	fn oversized_search_keeps_the_cursor_in_the_field() {
		let mut router = PointerRouter::new();
		let mut picker = IconPicker::new(IconCatalog::builtin(), PickerConfig::new(|_| {})).unwrap();
		picker.open(&mut router);
		picker.set_search("w".repeat(70_000));

		let view = picker.view().unwrap();
		let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
		let mut hits = PickerHitMap::default();
		terminal
			.draw(|frame| {
				let area = frame.area();
				hits = render_picker(frame, area, &view, &Theme::default());
			})
			.unwrap();

		let field = hits.rect_of(&HitTarget::SearchField).unwrap();
		let cursor = terminal.get_cursor_position().unwrap();
		assert!(field.contains(cursor));
		assert!(cursor.x < field.right() - 1);
	}

	#[test]
	fn closed_picker_shows_the_placeholder_trigger() {
		let picker = IconPicker::new(IconCatalog::builtin(), PickerConfig::new(|_| {})).unwrap();
		let (screen, hits) = draw(&picker, 40, 10);
		assert!(screen.contains(TRIGGER_PLACEHOLDER));
		assert_eq!(hits.boundary().len(), 1);
		let trigger = hits.rect_of(&HitTarget::Trigger).unwrap();
		assert_eq!(
			hits.target_at(Position::new(trigger.x + 1, trigger.y + 1)),
			Some(&HitTarget::Trigger)
		);
	}

	#[test]
	fn open_panel_draws_grid_and_first_page_footer() {
		let mut router = PointerRouter::new();
		let mut picker =
			IconPicker::new(IconCatalog::builtin(), PickerConfig::new(|_| {})).unwrap();
		picker.open(&mut router);

		let (screen, hits) = draw(&picker, 80, 40);

		assert!(screen.contains("Page 1 of 2"));
		assert!(screen.contains("Next"));
		assert!(!screen.contains("Previous"));
		assert!(screen.contains("Search icons..."));
		assert_eq!(hits.boundary().len(), 2);
		assert!(hits.rect_of(&HitTarget::PrevPage).is_none());
		assert!(hits.rect_of(&HitTarget::NextPage).is_some());
		assert!(hits.rect_of(&HitTarget::ClearSearch).is_none());

		let first = hits.rect_of(&HitTarget::Icon("activity".into())).unwrap();
		assert_eq!(
			hits.target_at(Position::new(first.x, first.y)),
			Some(&HitTarget::Icon("activity".into()))
		);
	}

	#[test]
	fn last_page_shows_previous_and_disables_next() {
		let mut router = PointerRouter::new();
		let mut picker =
			IconPicker::new(IconCatalog::builtin(), PickerConfig::new(|_| {})).unwrap();
		picker.open(&mut router);
		picker.next_page();

		let (screen, hits) = draw(&picker, 80, 40);

		assert!(screen.contains("Page 2 of 2"));
		assert!(screen.contains("Previous"));
		assert!(screen.contains("Next"));
		assert!(hits.rect_of(&HitTarget::PrevPage).is_some());
		assert!(hits.rect_of(&HitTarget::NextPage).is_none());
	}

	#[test]
	fn search_text_offers_clear_and_empty_results_message() {
		let mut router = PointerRouter::new();
		let mut picker =
			IconPicker::new(IconCatalog::builtin(), PickerConfig::new(|_| {})).unwrap();
		picker.open(&mut router);
		picker.set_search("zz-no-match");

		let (screen, hits) = draw(&picker, 80, 40);

		assert!(screen.contains("zz-no-match"));
		assert!(screen.contains(EMPTY_GRID_MESSAGE));
		assert!(screen.contains("Page 1 of 1"));
		assert!(hits.rect_of(&HitTarget::ClearSearch).is_some());
	}

	#[test]
	fn selected_icon_is_named_on_the_trigger() {
		let mut router = PointerRouter::new();
		let mut picker =
			IconPicker::new(IconCatalog::builtin(), PickerConfig::new(|_| {})).unwrap();
		picker.select("heart", &mut router).unwrap();

		let (screen, _) = draw(&picker, 40, 10);

		assert!(screen.contains("heart"));
		assert!(screen.contains("36×36"));
		assert!(!screen.contains(TRIGGER_PLACEHOLDER));
	}

	#[test]
	fn presses_outside_the_boundary_miss_every_target() {
		let mut router = PointerRouter::new();
		let mut picker =
			IconPicker::new(IconCatalog::builtin(), PickerConfig::new(|_| {})).unwrap();
		picker.open(&mut router);
		let (_, hits) = draw(&picker, 80, 40);
		assert_eq!(hits.target_at(Position::new(0, 0)), None);
	}
}
