use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Site scraped when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://quotes.toscrape.com";

/// What to do with a quote container that lacks its text or author
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort the run with a `MalformedDocument` error
    #[default]
    Error,
    /// Drop the container and keep going
    Skip,
}

/// Configuration for a scrape run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Site root, page paths are appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the first listing page
    #[serde(default = "default_start_path")]
    pub start_path: String,

    /// Where the CSV file is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Stop after this many pages (unbounded when absent)
    #[serde(default)]
    pub max_pages: Option<usize>,

    /// Handling of quote containers missing text or author
    #[serde(default)]
    pub on_malformed: MalformedPolicy,

    /// Per-request timeout in seconds (none when absent)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Default value for base_url
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default value for start_path
fn default_start_path() -> String {
    "/page/1/".to_string()
}

/// Default value for output_path
fn default_output_path() -> PathBuf {
    PathBuf::from("quotes.csv")
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ScraperConfig {
    /// Create a new configuration with default values
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            start_path: default_start_path(),
            output_path: default_output_path(),
            max_pages: None,
            on_malformed: MalformedPolicy::default(),
            request_timeout_secs: None,
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path.display(), e)))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path.display(), e)))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScrapeError> {
        serde_json::from_str(json).map_err(|e| ScrapeError::Config(e.to_string()))
    }
}
