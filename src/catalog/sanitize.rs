//! Markup checks applied to catalogs that do not ship with the binary.
//!
//! Rendered icons are inserted into the display tree verbatim. The bundled
//! catalog is trusted; anything loaded from disk goes through [`check_markup`]
//! first.

use super::CatalogError;

const FORBIDDEN_FRAGMENTS: &[&str] = &["<script", "<foreignobject", "javascript:", "<iframe"];

/// Reject icon contents that could execute code once inserted as raw markup.
pub(super) fn check_markup(name: &str, contents: &str) -> Result<(), CatalogError> {
	let lowered = contents.to_ascii_lowercase();

	if let Some(fragment) = FORBIDDEN_FRAGMENTS
		.iter()
		.find(|fragment| lowered.contains(**fragment))
	{
		return Err(CatalogError::UnsafeMarkup {
			name: name.to_string(),
			reason: format!("contains `{fragment}`"),
		});
	}

	if let Some(attribute) = event_handler_attribute(&lowered) {
		return Err(CatalogError::UnsafeMarkup {
			name: name.to_string(),
			reason: format!("declares event handler `{attribute}`"),
		});
	}

	Ok(())
}

/// Names are spliced into the rendered `class` attribute.
pub(super) fn check_name(name: &str) -> Result<(), CatalogError> {
	let valid = name
		.bytes()
		.all(|byte| byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_');
	if valid {
		Ok(())
	} else {
		Err(CatalogError::InvalidName {
			name: name.to_string(),
		})
	}
}

fn is_attribute_name_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b':' | b'.')
}

/// Find the first `on*=` attribute in already-lowercased markup.
///
/// Parsers start a new attribute after whitespace, `/` or a closing quote, so
/// any byte that cannot continue an attribute name counts as a separator.
fn event_handler_attribute(markup: &str) -> Option<&str> {
	let bytes = markup.as_bytes();
	for start in 0..bytes.len().saturating_sub(1) {
		if &bytes[start..start + 2] != b"on" {
			continue;
		}
		if start > 0 && is_attribute_name_byte(bytes[start - 1]) {
			continue;
		}

		let rest = &bytes[start + 2..];
		let letters = rest.iter().take_while(|byte| byte.is_ascii_alphabetic()).count();
		if letters == 0 {
			continue;
		}

		let after_name = rest[letters..]
			.iter()
			.find(|byte| !byte.is_ascii_whitespace());
		if after_name == Some(&b'=') {
			return Some(&markup[start..start + 2 + letters]);
		}
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_shapes_pass() {
		let contents = r#"<circle cx="12" cy="12" r="10"></circle><polyline points="12 6 12 12 16 14"></polyline>"#;
		assert!(check_markup("clock", contents).is_ok());
	}

	#[test]
	fn script_elements_are_rejected() {
		let err = check_markup("evil", "<SCRIPT>alert(1)</SCRIPT>").unwrap_err();
		assert!(matches!(err, CatalogError::UnsafeMarkup { ref name, .. } if name == "evil"));
		assert!(err.to_string().contains("<script"));
	}

	#[test]
	fn event_handlers_are_rejected() {
		let err = check_markup("evil", r#"<circle onload = "steal()" r="1"></circle>"#).unwrap_err();
		assert!(err.to_string().contains("onload"));
	}

	#[test]
	fn words_starting_with_on_are_not_handlers() {
		assert_eq!(event_handler_attribute(r#"<text class="x"> only once </text>"#), None);
	}

	#[test]
	fn handlers_after_a_slash_or_quote_are_rejected() {
		assert_eq!(
			event_handler_attribute(r#"<circle/onload="alert(1)" r="1"></circle>"#),
			Some("onload")
		);
		assert_eq!(
			event_handler_attribute(r#"<circle r="1"onclick="alert(1)"></circle>"#),
			Some("onclick")
		);
		assert_eq!(
			event_handler_attribute("<circle r='1'onmouseover='x()'></circle>"),
			Some("onmouseover")
		);
	}

	#[test]
	fn attribute_names_containing_on_are_not_handlers() {
		let contents = r#"<polygon points="0 0" data-onset="1" button="x"></polygon>"#;
		assert_eq!(event_handler_attribute(contents), None);
	}

	#[test]
	fn names_are_limited_to_class_safe_characters() {
		assert!(check_name("arrow-down_2").is_ok());
		let err = check_name(r#"x" onload="alert(1)"#).unwrap_err();
		assert!(matches!(err, CatalogError::InvalidName { ref name } if name.starts_with("x\"")));
		assert!(check_name("two words").is_err());
	}

	#[test]
	fn javascript_urls_are_rejected() {
		let contents = r#"<a href="JavaScript:void(0)"><path d="M0 0"></path></a>"#;
		assert!(check_markup("link", contents).is_err());
	}
}
