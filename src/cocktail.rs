use log::debug;
use once_cell::unsync::OnceCell;
use serde::Serialize;
use std::rc::Rc;

use crate::error::Result;
use crate::extractors::{DetailExtractor, Extractor, ParsingContext};
use crate::fetchers::Fetcher;
use crate::ingredient::parse_ingredient;
use crate::model::{CocktailDetail, CocktailStub, Ingredient};
use crate::normalize::normalize;
use crate::title::format_title;

/// A cocktail whose detail page is fetched on first use.
///
/// Once the detail page has been fetched and parsed, the result is kept for
/// the lifetime of the value; later calls never fetch again.
pub struct Cocktail {
    name: Option<String>,
    url: String,
    category: Option<String>,
    fetcher: Rc<dyn Fetcher>,
    detail: OnceCell<CocktailDetail>,
    ingredients: OnceCell<Vec<Ingredient>>,
}

/// Serializable snapshot of a resolved cocktail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CocktailRecord {
    pub name: String,
    pub url: String,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub description: String,
}

impl Cocktail {
    /// Builds a cocktail from a list entry. `url` is the stub's link resolved
    /// to an absolute URL.
    pub fn from_stub(stub: CocktailStub, url: String, fetcher: Rc<dyn Fetcher>) -> Self {
        Self {
            name: Some(stub.name),
            url,
            category: stub.category,
            fetcher,
            detail: OnceCell::new(),
            ingredients: OnceCell::new(),
        }
    }

    /// Builds a cocktail known only by its page; the name is read from the page.
    pub fn from_url(url: impl Into<String>, fetcher: Rc<dyn Fetcher>) -> Self {
        Self {
            name: None,
            url: url.into(),
            category: None,
            fetcher,
            detail: OnceCell::new(),
            ingredients: OnceCell::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn detail(&self) -> Result<&CocktailDetail> {
        self.detail.get_or_try_init(|| {
            debug!("Resolving cocktail page {}", self.url);
            let html = self.fetcher.fetch(&self.url)?;
            let context = ParsingContext::new(self.url.as_str(), &html);
            DetailExtractor.parse(&context)
        })
    }

    /// Name as found in the markup.
    pub fn raw_name(&self) -> Result<&str> {
        match &self.name {
            Some(name) => Ok(name.as_str()),
            None => Ok(self.detail()?.name.as_str()),
        }
    }

    /// Normalized name, used to select a cocktail by name.
    pub fn name(&self) -> Result<String> {
        Ok(normalize(self.raw_name()?))
    }

    /// Display title, also used as the output file name.
    pub fn title(&self) -> Result<String> {
        Ok(format_title(&self.name()?))
    }

    /// Cocktail type, e.g. "All Day Cocktail", when the page has one.
    pub fn kind(&self) -> Result<Option<String>> {
        Ok(self.detail()?.kind.as_deref().map(normalize))
    }

    pub fn ingredients(&self) -> Result<&[Ingredient]> {
        let ingredients = self
            .ingredients
            .get_or_try_init(|| -> Result<Vec<Ingredient>> {
                let lines = &self.detail()?.ingredient_lines;
                Ok(lines.iter().map(|line| parse_ingredient(line)).collect())
            })?;
        Ok(ingredients)
    }

    pub fn description(&self) -> Result<&str> {
        Ok(self.detail()?.description.as_str())
    }

    pub fn to_record(&self) -> Result<CocktailRecord> {
        Ok(CocktailRecord {
            name: self.name()?,
            url: self.url.clone(),
            category: self.category.clone(),
            kind: self.kind()?,
            ingredients: self.ingredients()?.to_vec(),
            description: self.description()?.to_string(),
        })
    }
}
