//! Markdown rendering of a cocktail.
//!
//! Every document has the same layout:
//!
//! ```text
//! # {title}
//!
//! ## Variations
//!
//! ### IBA
//!
//! * {ingredient}
//! * {ingredient}
//!
//! {description}
//! ```

use crate::cocktail::Cocktail;
use crate::error::Result;
use crate::ingredient::pluralize_unit;
use crate::model::{Ingredient, Quantity, RenderModel};

/// Renders a cocktail into its Markdown document.
pub fn render(cocktail: &Cocktail) -> Result<String> {
    Ok(render_model(&build_model(cocktail)?))
}

/// Flattens a cocktail into the fields the document needs.
pub fn build_model(cocktail: &Cocktail) -> Result<RenderModel> {
    Ok(RenderModel {
        title: cocktail.title()?,
        ingredient_lines: cocktail.ingredients()?.iter().map(ingredient_line).collect(),
        description: cocktail.description()?.to_string(),
    })
}

pub fn render_model(model: &RenderModel) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", model.title));
    output.push_str("## Variations\n\n");
    output.push_str("### IBA\n\n");
    for line in &model.ingredient_lines {
        output.push_str(&format!("* {}\n", line));
    }
    output.push('\n');
    output.push_str(&model.description);

    output.trim().to_string()
}

/// `**60 ml** Gin` for measured ingredients, the bare description otherwise.
pub fn ingredient_line(ingredient: &Ingredient) -> String {
    match &ingredient.quantity {
        Some(quantity) => format!(
            "**{}** {}",
            quantity_display(quantity, ingredient.unit.as_deref()),
            ingredient.description
        ),
        None => ingredient.description.clone(),
    }
}

pub fn quantity_display(quantity: &Quantity, unit: Option<&str>) -> String {
    let amount = quantity.to_string();
    match unit {
        Some(unit) if amount == "1" => format!("{amount} {unit}"),
        Some(unit) => format!("{amount} {}", pluralize_unit(unit)),
        None => amount,
    }
}
