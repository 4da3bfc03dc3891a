use std::rc::Rc;
use std::time::Duration;

use crate::config::Settings;
use crate::fetchers::{Fetcher, RequestFetcher};
use crate::{ImportError, Pipeline};

/// Builder for configuring a [`Pipeline`]
#[derive(Default)]
pub struct PipelineBuilder {
    settings: Option<Settings>,
    base_url: Option<String>,
    list_path: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    fetcher: Option<Rc<dyn Fetcher>>,
}

impl PipelineBuilder {
    /// Start from loaded settings instead of the defaults
    ///
    /// # Example
    /// ```no_run
    /// use iba_import::{Pipeline, Settings};
    ///
    /// let builder = Pipeline::builder().settings(Settings::load().unwrap());
    /// ```
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Set the site root that relative links are resolved against
    ///
    /// # Example
    /// ```
    /// use iba_import::Pipeline;
    ///
    /// let builder = Pipeline::builder().base_url("http://localhost:8080");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the path of the cocktail index page
    pub fn list_path(mut self, path: impl Into<String>) -> Self {
        self.list_path = Some(path.into());
        self
    }

    /// Set the user agent sent with every request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// The duration is used as given, sub-second part included.
    /// [`Settings::timeout`] reports it rounded up to whole seconds.
    ///
    /// # Example
    /// ```
    /// use iba_import::Pipeline;
    /// use std::time::Duration;
    ///
    /// let builder = Pipeline::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use a custom fetcher instead of HTTP
    ///
    /// Network settings (user agent, timeout) are ignored when a fetcher is
    /// given.
    pub fn fetcher(mut self, fetcher: Rc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Build the pipeline
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - The timeout is zero
    /// - The base URL is not a valid URL
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<Pipeline, ImportError> {
        let mut settings = self.settings.unwrap_or_default();
        if let Some(base_url) = self.base_url {
            settings.base_url = base_url;
        }
        if let Some(list_path) = self.list_path {
            settings.list_path = list_path;
        }
        if let Some(user_agent) = self.user_agent {
            settings.user_agent = user_agent;
        }
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(settings.timeout));
        if timeout.is_zero() {
            return Err(ImportError::BuilderError(
                "Timeout must be greater than zero".to_string(),
            ));
        }
        settings.timeout = whole_seconds(timeout);

        let fetcher: Rc<dyn Fetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Rc::new(RequestFetcher::new(Some(timeout), &settings.user_agent)?),
        };

        Pipeline::new(settings, fetcher)
    }
}

fn whole_seconds(timeout: Duration) -> u64 {
    let seconds = timeout.as_secs();
    if timeout.subsec_nanos() > 0 {
        seconds + 1
    } else {
        seconds
    }
}
