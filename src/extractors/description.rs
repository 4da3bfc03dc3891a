//! Isolates the free-text description from a cocktail's info block.
//!
//! The description has no class or id of its own. It is found by position
//! among the children of the info container, so any change to the page
//! layout only needs to be handled here.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

use crate::error::{ImportError, Result};
use crate::normalize::{normalize, replace_double_quotes};

/// Index of the description among the info container's child nodes
const DESCRIPTION_CHILD: usize = 4;

static MISSING_SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.)\.([A-Z])").expect("valid regex"));
static TRAILING_VARIATIONS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+Variations:$").expect("valid regex"));
static TRAILING_NOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(note:.*$").expect("valid regex"));

/// Extracts and cleans the description text of a cocktail.
pub fn extract_description(info: ElementRef) -> Result<String> {
    let node = info
        .children()
        .nth(DESCRIPTION_CHILD)
        .ok_or_else(|| ImportError::missing("description (5th child of .oc_info)"))?;

    let raw: String = node
        .descendants()
        .filter_map(|n| n.value().as_text().map(|t| &**t))
        .collect();
    let has_line_break = node.descendants().any(|n| {
        n.value()
            .as_element()
            .is_some_and(|element| element.name() == "br")
    });

    let mut text = replace_double_quotes(&normalize(&raw));

    // Text extraction drops <br>, gluing "Stir.Pour" together
    if has_line_break {
        debug!("Repairing sentence breaks in description");
        text = MISSING_SENTENCE_BREAK
            .replace_all(&text, "${1}. ${2}")
            .into_owned();
    }

    let text = TRAILING_VARIATIONS.replace(&text, "");
    let text = TRAILING_NOTE.replace(&text, ".");
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::selector;
    use scraper::Html;

    fn describe(body: &str) -> Result<String> {
        let html = format!(
            r#"<html><body><div class="oc_info"><div class="info1">Name</div><div class="info2">Type</div><div class="list"><ul><li>Ice</li></ul></div><img src="glass.jpg">{body}</div></body></html>"#
        );
        let document = Html::parse_document(&html);
        let info = document.select(&selector(".oc_info")).next().unwrap();
        extract_description(info)
    }

    #[test]
    fn test_selects_fifth_child() {
        assert_eq!(describe("<p>Stir and strain.</p>").unwrap(), "Stir and strain.");
    }

    #[test]
    fn test_text_node_child() {
        assert_eq!(describe("  Build in   glass. ").unwrap(), "Build in glass.");
    }

    #[test]
    fn test_strips_trailing_variations() {
        assert_eq!(
            describe("<p>Stir well... Variations:</p>").unwrap(),
            "Stir well..."
        );
        // only at the end
        assert_eq!(
            describe("<p>Variations: none. Stir.</p>").unwrap(),
            "Variations: none. Stir."
        );
    }

    #[test]
    fn test_note_becomes_period() {
        assert_eq!(
            describe("<p>Shake with ice (note: use fresh juice)</p>").unwrap(),
            "Shake with ice."
        );
    }

    #[test]
    fn test_note_match_is_case_sensitive() {
        assert_eq!(
            describe("<p>Shake (Note: x)</p>").unwrap(),
            "Shake (Note: x)"
        );
    }

    #[test]
    fn test_variations_stripped_before_note() {
        assert_eq!(
            describe("<p>Shake well (note: chill the glass) Variations:</p>").unwrap(),
            "Shake well."
        );
    }

    #[test]
    fn test_line_break_repair() {
        assert_eq!(
            describe("<p>Stir with ice.<br>Strain into glass.</p>").unwrap(),
            "Stir with ice. Strain into glass."
        );
    }

    #[test]
    fn test_no_repair_without_line_break() {
        assert_eq!(describe("<p>Use St.Germain</p>").unwrap(), "Use St.Germain");
    }

    #[test]
    fn test_smart_quotes() {
        assert_eq!(
            describe("<p>Call it a \u{201C}Gibson\u{201D}, it\u{2019}s fine.</p>").unwrap(),
            "Call it a \"Gibson\", it's fine."
        );
    }

    #[test]
    fn test_missing_description() {
        let document = Html::parse_document(r#"<div class="oc_info"><div class="info1">Name</div></div>"#);
        let info = document.select(&selector(".oc_info")).next().unwrap();
        assert!(matches!(
            extract_description(info),
            Err(ImportError::ExtractionError(_))
        ));
    }
}
