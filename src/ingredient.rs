//! Parsing of free-text ingredient lines such as "2 dashes Angostura bitters".

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Ingredient, Quantity};
use crate::normalize::{capitalize, normalize};

struct Unit {
    singular: &'static str,
    plural: &'static str,
    abbreviation: Option<&'static str>,
}

// Abbreviations are uncountable, so "cl" and "ml" are their own plural.
const UNITS: &[Unit] = &[
    Unit { singular: "dash", plural: "dashes", abbreviation: None },
    Unit { singular: "splash", plural: "splashes", abbreviation: None },
    Unit { singular: "drop", plural: "drops", abbreviation: None },
    Unit { singular: "cl", plural: "cl", abbreviation: Some("cl") },
    Unit { singular: "ml", plural: "ml", abbreviation: Some("ml") },
    Unit { singular: "teaspoon", plural: "teaspoons", abbreviation: Some("tsp") },
    Unit { singular: "bar spoon", plural: "bar spoons", abbreviation: Some("bsp") },
];

static MATCHER: Lazy<Regex> = Lazy::new(|| {
    let mut tokens: Vec<&str> = Vec::new();
    for unit in UNITS {
        for token in [unit.plural, unit.singular] {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
    }
    let units = tokens
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");

    // ASCII digits and ASCII-only case folding, so that "２" or "ſplash" are
    // never taken for an amount or a unit
    Regex::new(&format!(
        r"(?i)^(?P<quantity>[0-9]+(?:\.[0-9]+)?(?: to [0-9])?)(?: (?P<unit>(?-u:{units})))?(?: of)? (?P<description>.+)$"
    ))
    .expect("valid ingredient pattern")
});

impl Unit {
    fn lookup(token: &str) -> Option<&'static Unit> {
        let token = token.to_lowercase();
        UNITS
            .iter()
            .find(|unit| unit.singular == token || unit.plural == token)
    }

    fn canonical(&self) -> &'static str {
        self.abbreviation.unwrap_or(self.singular)
    }
}

/// Parses one ingredient line into description, quantity and unit.
///
/// Lines without a leading amount are not an error: they come back as a bare
/// capitalized description ("ice cubes" becomes "Ice cubes").
pub fn parse_ingredient(line: &str) -> Ingredient {
    let text = normalize(line);

    let Some(captures) = MATCHER.captures(&text) else {
        debug!("No quantity in ingredient line {:?}", text);
        return Ingredient::plain(capitalize(&text));
    };

    let raw_quantity = &captures["quantity"];
    let mut quantity = match raw_quantity.parse::<f64>() {
        Ok(number) => Quantity::Number(number),
        Err(_) => Quantity::Text(raw_quantity.to_string()),
    };

    let unit = match captures
        .name("unit")
        .and_then(|token| Unit::lookup(token.as_str()))
    {
        Some(unit) if unit.singular == "cl" => match quantity {
            Quantity::Number(amount) => {
                quantity = Quantity::Number(centilitres_to_millilitres(amount));
                Some("ml".to_string())
            }
            // ranges stay in centilitres
            Quantity::Text(_) => Some(unit.canonical().to_string()),
        },
        Some(unit) => Some(unit.canonical().to_string()),
        None => None,
    };

    Ingredient {
        description: normalize(&captures["description"]),
        quantity: Some(quantity),
        unit,
    }
}

fn centilitres_to_millilitres(amount: f64) -> f64 {
    // Rounded first so that 0.7 cl does not turn into 8 ml
    let millilitres = (amount * 10.0 * 1e6).round() / 1e6;
    millilitres.ceil()
}

/// Returns the plural form of a canonical unit.
pub fn pluralize_unit(unit: &str) -> String {
    if let Some(known) = UNITS.iter().find(|u| u.canonical() == unit) {
        return match known.abbreviation {
            Some(abbreviation) => abbreviation.to_string(),
            None => known.plural.to_string(),
        };
    }

    let sibilant = ["s", "sh", "ch", "x", "z"]
        .iter()
        .any(|suffix| unit.ends_with(suffix));
    if sibilant {
        format!("{unit}es")
    } else {
        format!("{unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> (String, Option<Quantity>, Option<String>) {
        let ingredient = parse_ingredient(line);
        (ingredient.description, ingredient.quantity, ingredient.unit)
    }

    #[test]
    fn test_centilitres_become_millilitres() {
        assert_eq!(
            parsed("1.5 cl Campari"),
            ("Campari".to_string(), Some(Quantity::Number(15.0)), Some("ml".to_string()))
        );
        assert_eq!(
            parsed("6 cl Gin"),
            ("Gin".to_string(), Some(Quantity::Number(60.0)), Some("ml".to_string()))
        );
    }

    #[test]
    fn test_centilitre_conversion_rounds_up() {
        assert_eq!(parsed("0.75 cl Sugar syrup").1, Some(Quantity::Number(8.0)));
        assert_eq!(parsed("0.7 cl Sugar syrup").1, Some(Quantity::Number(7.0)));
    }

    #[test]
    fn test_plural_unit_is_singularized_and_abbreviated() {
        assert_eq!(
            parsed("2 teaspoons sugar"),
            ("sugar".to_string(), Some(Quantity::Number(2.0)), Some("tsp".to_string()))
        );
        assert_eq!(
            parsed("2 bar spoons of maraschino"),
            ("maraschino".to_string(), Some(Quantity::Number(2.0)), Some("bsp".to_string()))
        );
    }

    #[test]
    fn test_unit_matching_is_case_insensitive() {
        assert_eq!(
            parsed("2 Dashes Angostura bitters"),
            (
                "Angostura bitters".to_string(),
                Some(Quantity::Number(2.0)),
                Some("dash".to_string())
            )
        );
        assert_eq!(parsed("1 ML Lime juice").2, Some("ml".to_string()));
    }

    #[test]
    fn test_of_is_skipped() {
        assert_eq!(
            parsed("1 splash of Soda water"),
            ("Soda water".to_string(), Some(Quantity::Number(1.0)), Some("splash".to_string()))
        );
    }

    #[test]
    fn test_quantity_without_unit() {
        assert_eq!(
            parsed("2 Egg yolks"),
            ("Egg yolks".to_string(), Some(Quantity::Number(2.0)), None)
        );
        // a word that only starts like a unit is part of the description
        assert_eq!(
            parsed("1 dashboard cherry"),
            ("dashboard cherry".to_string(), Some(Quantity::Number(1.0)), None)
        );
    }

    #[test]
    fn test_range_is_kept_as_text() {
        assert_eq!(
            parsed("1 to 2 drops Orange bitters"),
            (
                "Orange bitters".to_string(),
                Some(Quantity::Text("1 to 2".to_string())),
                Some("drop".to_string())
            )
        );
        assert_eq!(
            parsed("1 to 2 cl Cream"),
            (
                "Cream".to_string(),
                Some(Quantity::Text("1 to 2".to_string())),
                Some("cl".to_string())
            )
        );
    }

    #[test]
    fn test_lines_without_quantity_fall_back() {
        assert_eq!(parsed("ice cubes"), ("Ice cubes".to_string(), None, None));
        assert_eq!(parsed("Ice"), ("Ice".to_string(), None, None));
        assert_eq!(parsed("2cl Gin"), ("2cl gin".to_string(), None, None));
    }

    #[test]
    fn test_line_is_normalized_first() {
        assert_eq!(
            parsed("  3 cl\u{00A0}Gordon\u{2019}s   Gin "),
            (
                "Gordon's Gin".to_string(),
                Some(Quantity::Number(30.0)),
                Some("ml".to_string())
            )
        );
    }

    #[test]
    fn test_non_ascii_digits_fall_back() {
        assert_eq!(parsed("\u{FF12} cl Gin"), ("\u{FF12} cl gin".to_string(), None, None));
        assert_eq!(
            parsed("\u{FF11}.\u{FF15} cl Campari"),
            ("\u{FF11}.\u{FF15} cl campari".to_string(), None, None)
        );
    }

    #[test]
    fn test_units_only_fold_ascii_case() {
        assert_eq!(
            parsed("1 \u{017F}plash Soda"),
            ("\u{017F}plash Soda".to_string(), Some(Quantity::Number(1.0)), None)
        );
        assert_eq!(parsed("1 SPLASH Soda").2, Some("splash".to_string()));
    }

    #[test]
    fn test_unit_never_without_quantity() {
        for line in ["dash of bitters", "Splash Soda", "", "cl"] {
            let ingredient = parse_ingredient(line);
            assert!(ingredient.unit.is_none() || ingredient.quantity.is_some());
        }
    }

    #[test]
    fn test_pluralize_unit() {
        assert_eq!(pluralize_unit("dash"), "dashes");
        assert_eq!(pluralize_unit("splash"), "splashes");
        assert_eq!(pluralize_unit("drop"), "drops");
        assert_eq!(pluralize_unit("ml"), "ml");
        assert_eq!(pluralize_unit("tsp"), "tsp");
        assert_eq!(pluralize_unit("bsp"), "bsp");
        assert_eq!(pluralize_unit("cl"), "cl");
        assert_eq!(pluralize_unit("slice"), "slices");
    }
}
