//! Terminal presentation for the picker: themes, drawing, and hit testing.

pub mod render;
pub mod theme;

pub use render::{HitTarget, PickerHitMap, render_picker};
pub use theme::{Theme, ThemeDefinition, by_name, default_theme, names};
