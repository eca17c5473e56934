/// Text shown on the trigger before anything has been selected.
pub const TRIGGER_PLACEHOLDER: &str = "Select Icon";
/// Placeholder shown in the empty search field.
pub const SEARCH_PLACEHOLDER: &str = "Search icons...";

/// Everything needed to draw a picker, derived from its state.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerView {
	pub trigger: TriggerView,
	/// Present only while the picker is open.
	pub panel: Option<PanelView>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TriggerView {
	Placeholder,
	Icon(IconView),
}

/// One rendered icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconView {
	pub name: String,
	pub symbol: Option<String>,
	/// SVG produced by the catalog, inserted without escaping.
	pub markup: String,
	pub width: f64,
	pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
	pub width: f64,
	pub height: f64,
	pub search: SearchView,
	pub columns: usize,
	pub cells: Vec<IconView>,
	/// Index into `cells` of the keyboard highlight.
	pub highlighted: Option<usize>,
	pub footer: FooterView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
	pub text: String,
	pub placeholder: &'static str,
	/// The clear affordance is only offered for a non-empty term.
	pub show_clear: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
	pub label: String,
	/// The previous control is hidden, not disabled, on the first page.
	pub show_prev: bool,
	/// The next control stays visible but is disabled on the last page.
	pub next_enabled: bool,
}
