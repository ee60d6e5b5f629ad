use crate::error::ScrapeError;
use std::future::Future;
use url::Url;

/// Source of page bodies for the walker
pub trait Fetcher {
    /// Fetch `url` and return its body as text
    ///
    /// Non-success responses must be reported as errors, never as a body.
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String, ScrapeError>> + Send;
}

impl<F: Fetcher + Sync> Fetcher for &F {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String, ScrapeError>> + Send {
        (**self).fetch(url)
    }
}
