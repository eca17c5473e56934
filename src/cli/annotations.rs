use std::fmt::Write;

use clap::Arg;
use clap::builder::{
	StyledStr,
	styling::{AnsiColor, Color, Style},
};

/// Move possible values, defaults, and env names to the end of each help
/// line in a muted style.
pub(crate) fn dim_cli_annotations(mut arg: Arg) -> Arg {
	let help = arg.get_help().map(ToString::to_string).unwrap_or_default();
	let mut annotations = Vec::new();

	if let Some(values) = possible_values_annotation(&arg) {
		arg = arg.hide_possible_values(true);
		annotations.push(values);
	}
	if !help.contains("(default:")
		&& let Some(default) = default_value_annotation(&arg)
	{
		arg = arg.hide_default_value(true);
		annotations.push(default);
	}
	if let Some(env) = env_annotation(&arg) {
		arg = arg.hide_env(true);
		annotations.push(env);
	}

	if help.is_empty() && annotations.is_empty() {
		return arg;
	}

	let mut styled = StyledStr::new();
	styled.push_str(&help);
	let mut separate = !help.is_empty();
	let style = muted();
	for annotation in annotations {
		if separate {
			styled.push_str(" ");
		}
		let _ = write!(styled, "{style}{annotation}{style:#}");
		separate = true;
	}
	arg.help(styled)
}

fn muted() -> Style {
	Style::new()
		.fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
		.dimmed()
}

/// Quote values that contain whitespace.
fn display_value(value: &str) -> String {
	if value.chars().any(char::is_whitespace) {
		format!("{value:?}")
	} else {
		value.to_string()
	}
}

pub(crate) fn possible_values_annotation(arg: &Arg) -> Option<String> {
	if !arg.get_action().takes_values() {
		return None;
	}
	let visible: Vec<String> = arg
		.get_possible_values()
		.iter()
		.filter(|value| !value.is_hide_set())
		.map(|value| display_value(value.get_name()))
		.collect();
	if visible.is_empty() {
		return None;
	}
	Some(format!("[possible values: {}]", visible.join(", ")))
}

pub(crate) fn default_value_annotation(arg: &Arg) -> Option<String> {
	let rendered: Vec<String> = arg
		.get_default_values()
		.iter()
		.map(|value| value.to_string_lossy())
		.filter(|value| !value.trim().is_empty())
		.map(|value| display_value(&value))
		.collect();
	if rendered.is_empty() {
		return None;
	}
	Some(format!("(default: {})", rendered.join(", ")))
}

pub(crate) fn env_annotation(arg: &Arg) -> Option<String> {
	let name = arg.get_env()?.to_string_lossy();
	if name.trim().is_empty() {
		return None;
	}
	Some(format!("[env: {name}=]"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn possible_values_skip_hidden_and_quote_whitespace() {
		let arg = Arg::new("output").value_parser(["plain", "as svg"]);
		assert_eq!(
			possible_values_annotation(&arg).unwrap(),
			"[possible values: plain, \"as svg\"]"
		);
	}

	#[test]
	fn default_values_ignore_blank_entries() {
		let arg = Arg::new("rows").default_values(["6", " "]);
		assert_eq!(default_value_annotation(&arg).unwrap(), "(default: 6)");
	}

	#[test]
	fn env_annotations_name_the_variable() {
		let arg = Arg::new("config").env("GLYPHPICK_CONFIG");
		assert_eq!(env_annotation(&arg).unwrap(), "[env: GLYPHPICK_CONFIG=]");
	}

	#[test]
	fn help_text_keeps_annotations_last() {
		let arg = Arg::new("theme").help("Theme name").default_value("slate");
		let arg = dim_cli_annotations(arg);
		assert_eq!(
			arg.get_help().unwrap().to_string(),
			"Theme name (default: slate)"
		);
	}
}
