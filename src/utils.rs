use crate::error::ScrapeError;
use url::Url;

/// Resolves a page reference against the site root
///
/// Absolute references are returned unchanged; anything else is appended to
/// `base_url` (minus its trailing slashes).
pub fn resolve_page_url(base_url: &str, page: &str) -> Result<Url, ScrapeError> {
    if let Ok(absolute) = Url::parse(page) {
        return Ok(absolute);
    }

    let joined = format!("{}{}", base_url.trim_end_matches('/'), page);
    Url::parse(&joined).map_err(|source| ScrapeError::InvalidUrl {
        url: joined,
        source,
    })
}

/// Renders tags as a list literal, e.g. `['life', 'love']`
pub fn tags_literal(tags: &[String]) -> String {
    let items = tags
        .iter()
        .map(|tag| quote_literal(tag))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", items)
}

/// Quotes a single string the way a list literal reprs its elements
fn quote_literal(s: &str) -> String {
    // Single quotes unless that would need escaping and double quotes wouldn't
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
