mod request;

pub use request::RequestFetcher;

use crate::error::Result;

/// Source of page bodies.
///
/// The pipeline only ever asks for absolute URLs; resolving relative links
/// happens before a fetcher is called.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}
