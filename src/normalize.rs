//! Canonicalization of strings pulled out of markup.

use once_cell::sync::Lazy;
use regex::Regex;

static SINGLE_QUOTES: Lazy<Regex> = Lazy::new(|| Regex::new("[\u{2018}\u{2019}]").expect("valid regex"));
static DOUBLE_QUOTES: Lazy<Regex> = Lazy::new(|| Regex::new("[\u{201C}\u{201D}]").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Replaces smart quotes with their ASCII counterparts, collapses whitespace
/// runs to a single space and trims the result.
pub fn normalize(s: &str) -> String {
    let text = WHITESPACE.replace_all(s, " ");
    let text = SINGLE_QUOTES.replace_all(&text, "'");
    let text = replace_double_quotes(&text);
    text.trim().to_string()
}

/// Replaces curly double quotes with `"`.
pub fn replace_double_quotes(s: &str) -> String {
    DOUBLE_QUOTES.replace_all(s, "\"").into_owned()
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
