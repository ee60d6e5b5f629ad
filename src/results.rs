use serde::{Deserialize, Serialize};

/// One quotation scraped from a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quotation body
    pub text: String,

    /// Attributed author name
    pub author: String,

    /// Tags in document order (may be empty)
    pub tags: Vec<String>,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }
}

/// Everything extracted from a single listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotePage {
    /// Quotes in document order
    pub quotes: Vec<Quote>,

    /// Link target of the pagination control, if the page has one
    pub next_page: Option<String>,
}

impl QuotePage {
    pub fn new(quotes: Vec<Quote>, next_page: Option<String>) -> Self {
        Self { quotes, next_page }
    }

    /// True when this is the last page of the listing
    pub fn is_last(&self) -> bool {
        self.next_page.is_none()
    }
}
