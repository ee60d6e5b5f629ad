pub mod config;
pub mod crawlers;
pub mod error;
pub mod output;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{DEFAULT_BASE_URL, MalformedPolicy, ScraperConfig};
pub use error::ScrapeError;
pub use results::{Quote, QuotePage};

use crawlers::{HttpFetcher, PageWalker};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Scrapes every listing page of a quotes site into a CSV file
pub struct QuoteScraper {
    config: ScraperConfig,
}

impl QuoteScraper {
    /// Create a scraper for the site rooted at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            config: ScraperConfig::new(base_url),
        }
    }

    /// Create a scraper from a complete configuration
    pub fn from_config(config: ScraperConfig) -> Self {
        Self { config }
    }

    /// Set the CSV output path
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Stop after `max_pages` pages even if more are linked
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = Some(max_pages);
        self
    }

    /// Choose how quote containers missing text or author are handled
    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.config.on_malformed = policy;
        self
    }

    /// Replace the configuration with one loaded from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, ScrapeError> {
        Ok(Self::from_config(ScraperConfig::from_file(path)?))
    }

    /// Replace the configuration with one parsed from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self, ScrapeError> {
        Ok(Self::from_config(ScraperConfig::from_json(json)?))
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Walk every page, then write the CSV; returns the number of quotes written
    ///
    /// Any failure aborts the run before the output file is touched, except a
    /// failure while writing the file itself.
    pub async fn run(&self) -> Result<usize, ScrapeError> {
        let timeout = self.config.request_timeout_secs.map(Duration::from_secs);
        let fetcher = HttpFetcher::new(timeout)?;
        let walker = PageWalker::new(fetcher, &self.config);

        ::log::info!("Starting scrape of {}", self.config.base_url);
        let quotes = walker.walk().await?;

        output::write_quotes(&quotes, &self.config.output_path)?;
        Ok(quotes.len())
    }
}

impl Default for QuoteScraper {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
