use super::{element_text, selector, Extractor, ParsingContext};
use crate::error::{ImportError, Result};
use crate::model::CocktailStub;
use crate::normalize::normalize;
use log::debug;

/// Container holding one `ul` per cocktail category
const ROOT: &str = "#cocktails > ul";

/// Reads the cocktail index page into stubs, in page order.
pub struct ListExtractor;

impl Extractor for ListExtractor {
    type Output = Vec<CocktailStub>;

    fn parse(&self, context: &ParsingContext) -> Result<Vec<CocktailStub>> {
        debug!("Extracting cocktail list from {}", context.url);

        let lists: Vec<_> = context.document.select(&selector(ROOT)).collect();
        if lists.is_empty() {
            return Err(ImportError::missing(ROOT));
        }

        let title_selector = selector("span");
        let item_selector = selector("li");
        let link_selector = selector("a");

        let mut stubs = Vec::new();
        for list in lists {
            let category = list
                .select(&title_selector)
                .next()
                .map(|title| normalize(&element_text(title)))
                .filter(|title| !title.is_empty());

            for item in list.select(&item_selector) {
                let link = item
                    .select(&link_selector)
                    .next()
                    .ok_or_else(|| ImportError::missing(format!("{ROOT} li a")))?;
                let url = link
                    .value()
                    .attr("href")
                    .ok_or_else(|| ImportError::missing(format!("{ROOT} li a[href]")))?;

                stubs.push(CocktailStub {
                    name: element_text(link),
                    url: url.to_string(),
                    category: category.clone(),
                });
            }
        }

        debug!("Found {} cocktails", stubs.len());
        Ok(stubs)
    }
}
