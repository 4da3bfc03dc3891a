use thiserror::Error;

/// Errors that can occur while importing cocktails
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to fetch a page, or the server answered with a non-success status
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// An expected element is missing from the page markup
    #[error("Missing element: {0}")]
    ExtractionError(String),

    /// A scraped link could not be resolved against the base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Failed to write an output document
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to serialize cocktails
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// The requested cocktail is not part of the list
    #[error("No cocktail named {0:?}")]
    CocktailNotFound(String),
}

impl ImportError {
    pub(crate) fn missing(element: impl Into<String>) -> Self {
        ImportError::ExtractionError(element.into())
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
