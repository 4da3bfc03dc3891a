use super::{element_text, extract_description, selector, Extractor, ParsingContext};
use crate::error::{ImportError, Result};
use crate::model::CocktailDetail;
use log::debug;

const ROOT: &str = ".oc_info";

/// Reads a cocktail detail page.
pub struct DetailExtractor;

impl Extractor for DetailExtractor {
    type Output = CocktailDetail;

    fn parse(&self, context: &ParsingContext) -> Result<CocktailDetail> {
        debug!("Extracting cocktail detail from {}", context.url);

        let info = context
            .document
            .select(&selector(ROOT))
            .next()
            .ok_or_else(|| ImportError::missing(ROOT))?;

        let name = info
            .select(&selector(".info1"))
            .next()
            .map(element_text)
            .ok_or_else(|| ImportError::missing(format!("{ROOT} .info1")))?;

        let kind = info
            .select(&selector(".info2"))
            .next()
            .map(element_text);

        let list = info
            .select(&selector(".list"))
            .next()
            .ok_or_else(|| ImportError::missing(format!("{ROOT} .list")))?;
        let ingredient_lines: Vec<String> =
            list.select(&selector("li")).map(element_text).collect();
        if ingredient_lines.is_empty() {
            return Err(ImportError::missing(format!("{ROOT} .list li")));
        }

        let description = extract_description(info)?;

        Ok(CocktailDetail {
            name,
            kind,
            ingredient_lines,
            description,
        })
    }
}
