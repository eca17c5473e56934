use anyhow::Result;
use serde_json::json;

use crate::workflow::PickReport;

/// Print the selected name, or a short notice when nothing was chosen.
pub(crate) fn print_plain(report: &PickReport) {
	if !report.outcome.accepted {
		println!("Selection cancelled");
		return;
	}

	match &report.outcome.icon {
		Some(name) => println!("{name}"),
		None => println!("No icon selected"),
	}
}

pub(crate) fn format_report_json(report: &PickReport) -> Result<String> {
	let payload = json!({
		"accepted": report.outcome.accepted,
		"icon": report.outcome.icon,
		"svg": report.svg,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(report: &PickReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}

/// Print the selected icon's markup. Prints nothing without a selection.
pub(crate) fn print_svg(report: &PickReport) {
	if let Some(svg) = &report.svg {
		println!("{svg}");
	}
}
