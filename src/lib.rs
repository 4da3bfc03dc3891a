pub mod builder;
pub mod cocktail;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod ingredient;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod renderer;
pub mod title;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

pub use builder::PipelineBuilder;
pub use cocktail::{Cocktail, CocktailRecord};
pub use config::Settings;
pub use error::{ImportError, Result};
pub use fetchers::{Fetcher, RequestFetcher};
pub use ingredient::parse_ingredient;
pub use model::{CocktailStub, Ingredient, Quantity, RenderModel};
pub use normalize::normalize;
pub use pipeline::Pipeline;
pub use renderer::render;
pub use title::format_title;

/// Builds every cocktail, or only the one called `name`, into `directory`
/// using settings from `iba.toml` and `IBA__*` environment variables.
///
/// # Example
/// ```no_run
/// use std::path::Path;
///
/// let written = iba_import::build(Path::new("cocktails"), Some("Dry Martini")).unwrap();
/// ```
pub fn build(directory: &Path, name: Option<&str>) -> Result<Vec<PathBuf>> {
    let settings = Settings::load()?;
    Pipeline::builder()
        .settings(settings)
        .build()?
        .build(directory, name)
}
