use serde::Serialize;
use std::fmt;

/// A cocktail as listed on the index page, before its detail page is fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CocktailStub {
    pub name: String,
    pub url: String,
    /// Title of the list group the cocktail appears under
    pub category: Option<String>,
}

/// Leading amount of an ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    /// Amounts that are not a plain decimal, e.g. "1 to 2"
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 formatting already drops a trailing ".0"
            Quantity::Number(n) => write!(f, "{}", n),
            Quantity::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub description: String,
    pub quantity: Option<Quantity>,
    /// Canonical unit; never set without a quantity
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn plain(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            quantity: None,
            unit: None,
        }
    }
}

/// Raw fields scraped from a cocktail detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct CocktailDetail {
    pub name: String,
    pub kind: Option<String>,
    pub ingredient_lines: Vec<String>,
    pub description: String,
}

/// Template-ready projection of a cocktail.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub title: String,
    pub ingredient_lines: Vec<String>,
    pub description: String,
}
