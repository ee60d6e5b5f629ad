use thiserror::Error;

/// Every way a scrape run can fail
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport failure (unreachable host, reset connection, bad body)
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// A required node was missing from the page markup
    #[error("malformed document: {}", describe_malformed(.index, .missing))]
    MalformedDocument {
        /// Zero-based quote container index, `None` for page-level nodes
        index: Option<usize>,
        missing: &'static str,
    },

    #[error("invalid page url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

fn describe_malformed(index: &Option<usize>, missing: &str) -> String {
    match *index {
        Some(i) => format!("quote container #{i} has no {missing}"),
        None => format!("page has no {missing}"),
    }
}
