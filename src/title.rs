use crate::normalize::capitalize;

/// Connector words that stay lower-case inside a title
const LOWERCASE_WORDS: &[&str] = &["on", "the"];

/// Converts a cocktail name into its display title.
///
/// Every word is capitalized, except the connector words in
/// [`LOWERCASE_WORDS`]. A letter that follows a hyphen is upper-cased too, so
/// "mary-anne" becomes "Mary-Anne".
pub fn format_title(raw_name: &str) -> String {
    raw_name
        .split_whitespace()
        .map(|word| {
            let lowercase = word.to_lowercase();
            if LOWERCASE_WORDS.contains(&lowercase.as_str()) {
                lowercase
            } else {
                capitalize_hyphenated(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_hyphenated(word: &str) -> String {
    let mut title = String::with_capacity(word.len());
    let mut after_hyphen = false;
    for c in capitalize(word).chars() {
        if after_hyphen && c.is_ascii_lowercase() {
            title.push(c.to_ascii_uppercase());
        } else {
            title.push(c);
        }
        after_hyphen = c == '-';
    }
    title
}
