use std::cell::Cell;
use std::collections::HashMap;
use std::io;

use crate::error::{ImportError, Result};
use crate::fetchers::Fetcher;

/// In-memory fetcher that counts requests.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requests: Cell<usize>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.requests.set(self.requests.get() + 1);
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ImportError::IoError(io::Error::new(io::ErrorKind::NotFound, url)))
    }
}
