use log::{debug, info, warn};
use once_cell::unsync::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use url::Url;

use crate::builder::PipelineBuilder;
use crate::cocktail::{Cocktail, CocktailRecord};
use crate::config::Settings;
use crate::error::{ImportError, Result};
use crate::extractors::{Extractor, ListExtractor, ParsingContext};
use crate::fetchers::Fetcher;
use crate::model::CocktailStub;
use crate::normalize::normalize;
use crate::renderer::render;

/// Scrapes the cocktail list and turns each cocktail into a document.
///
/// The list page is fetched once per pipeline; every cocktail fetches its
/// own detail page the first time one of its fields is needed.
pub struct Pipeline {
    settings: Settings,
    base_url: Url,
    fetcher: Rc<dyn Fetcher>,
    cocktails: OnceCell<Vec<Cocktail>>,
}

impl Pipeline {
    /// Creates a new builder for configuring a pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    pub fn new(settings: Settings, fetcher: Rc<dyn Fetcher>) -> Result<Self> {
        let mut base = settings.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        Ok(Self {
            settings,
            base_url,
            fetcher,
            cocktails: OnceCell::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolves a link found in the markup against the site root.
    pub fn resolve(&self, link: &str) -> Result<String> {
        Ok(self.base_url.join(link)?.to_string())
    }

    /// Fetches the list page and reads its entries.
    pub fn stubs(&self) -> Result<Vec<CocktailStub>> {
        let url = self.resolve(&self.settings.list_path)?;
        let html = self.fetcher.fetch(&url)?;
        let context = ParsingContext::new(url, &html);
        ListExtractor.parse(&context)
    }

    pub fn cocktails(&self) -> Result<&[Cocktail]> {
        let cocktails = self
            .cocktails
            .get_or_try_init(|| -> Result<Vec<Cocktail>> {
                let stubs = self.stubs()?;
                info!("Found {} cocktails", stubs.len());
                stubs
                    .into_iter()
                    .map(|stub| {
                        let url = self.resolve(&stub.url)?;
                        Ok(Cocktail::from_stub(stub, url, self.fetcher.clone()))
                    })
                    .collect()
            })?;
        Ok(cocktails)
    }

    /// Cocktails whose normalized name matches `name`, ignoring case, or all
    /// of them when no name is given.
    pub fn select(&self, name: Option<&str>) -> Result<Vec<&Cocktail>> {
        let wanted = name.map(|name| normalize(name).to_lowercase());
        let mut selected = Vec::new();
        for cocktail in self.cocktails()? {
            match &wanted {
                Some(wanted) if &cocktail.name()?.to_lowercase() != wanted => continue,
                _ => selected.push(cocktail),
            }
        }

        match (name, selected.is_empty()) {
            (Some(name), true) => Err(ImportError::CocktailNotFound(name.to_string())),
            _ => Ok(selected),
        }
    }

    /// Writes one `<title>.md` document per cocktail into `directory`.
    ///
    /// Existing files are overwritten, symbolic links are left alone. The
    /// first error aborts the run; documents written before it stay on disk.
    pub fn build(&self, directory: &Path, name: Option<&str>) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(directory)?;

        let mut written = Vec::new();
        for cocktail in self.select(name)? {
            let path = directory.join(format!("{}.md", cocktail.title()?));
            if is_symlink(&path) {
                warn!("Skipping {}: path is a symbolic link", path.display());
                continue;
            }

            let document = render(cocktail)?;
            fs::write(&path, format!("{document}\n"))?;
            debug!("Wrote {}", path.display());
            written.push(path);
        }

        info!("Wrote {} documents to {}", written.len(), directory.display());
        Ok(written)
    }

    pub fn records(&self, name: Option<&str>) -> Result<Vec<CocktailRecord>> {
        self.select(name)?
            .into_iter()
            .map(Cocktail::to_record)
            .collect()
    }

    /// Pretty-printed JSON array of the selected cocktails.
    pub fn to_json(&self, name: Option<&str>) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records(name)?)?)
    }
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|metadata| metadata.file_type().is_symlink())
        .unwrap_or(false)
}
