use crate::config::MalformedPolicy;
use crate::error::ScrapeError;
use crate::results::{Quote, QuotePage};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static QUOTE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("div.quote"));
static TEXT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("span.text"));
static AUTHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("small.author"));
static TAG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("a.tag"));
static NEXT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("li.next"));
static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

/// Parses a listing page with the default malformed-container policy
pub fn parse(html: &str) -> Result<QuotePage, ScrapeError> {
    extract(html, MalformedPolicy::default())
}

/// Extracts all quotes and the next-page link from a listing page
///
/// Quotes come back in document order. A container missing its text or
/// author is handled according to `policy`; a pagination node without a
/// link is always an error.
pub fn extract(html: &str, policy: MalformedPolicy) -> Result<QuotePage, ScrapeError> {
    let doc = Html::parse_document(html);

    let quotes = extract_quotes(&doc, policy)?;
    let next_page = extract_next_page(&doc)?;

    ::log::debug!(
        "HTML parser found {} quotes, next page: {:?}",
        quotes.len(),
        next_page
    );

    Ok(QuotePage::new(quotes, next_page))
}

/// Reads every quote container of a parsed document
pub fn extract_quotes(doc: &Html, policy: MalformedPolicy) -> Result<Vec<Quote>, ScrapeError> {
    let mut quotes = Vec::new();

    for (index, container) in doc.select(&QUOTE_SELECTOR).enumerate() {
        match read_quote(container, index) {
            Ok(quote) => quotes.push(quote),
            Err(e) if policy == MalformedPolicy::Skip => {
                ::log::warn!("Skipping {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(quotes)
}

/// Link target of the pagination control, `None` on the last page
pub fn extract_next_page(doc: &Html) -> Result<Option<String>, ScrapeError> {
    let Some(next) = doc.select(&NEXT_SELECTOR).next() else {
        return Ok(None);
    };

    next.select(&LINK_SELECTOR)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|href| Some(href.to_string()))
        .ok_or(ScrapeError::MalformedDocument {
            index: None,
            missing: "next page link",
        })
}

fn read_quote(container: ElementRef<'_>, index: usize) -> Result<Quote, ScrapeError> {
    let text = first_text(container, &TEXT_SELECTOR).ok_or(ScrapeError::MalformedDocument {
        index: Some(index),
        missing: "text",
    })?;
    let author = first_text(container, &AUTHOR_SELECTOR).ok_or(ScrapeError::MalformedDocument {
        index: Some(index),
        missing: "author",
    })?;
    let tags = container.select(&TAG_SELECTOR).map(node_text).collect();

    Ok(Quote::new(text, author, tags))
}

// Blank text counts as missing
fn first_text(container: ElementRef<'_>, selector: &Selector) -> Option<String> {
    container
        .select(selector)
        .next()
        .map(node_text)
        .filter(|text| !text.trim().is_empty())
}

fn node_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
