use crate::error::Result;
use scraper::{ElementRef, Html, Selector};

mod description;
mod detail;
mod list;

pub use description::extract_description;
pub use detail::DetailExtractor;
pub use list::ListExtractor;

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }
}

pub trait Extractor {
    type Output;

    fn parse(&self, context: &ParsingContext) -> Result<Self::Output>;
}

/// Selectors are compile-time constants, so parsing them cannot fail at runtime.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Concatenated text of an element, without separators between text nodes.
pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect()
}
