use crate::config::MalformedPolicy;
use crate::error::ScrapeError;
use crate::parsers::html;
use crate::results::Quote;

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn container(text: &str, author: &str, tags: &[&str]) -> String {
        let tags = tags
            .iter()
            .map(|t| format!(r#"<a class="tag" href="/tag/{t}/page/1/">{t}</a>"#))
            .collect::<String>();
        format!(
            r#"<div class="quote">
                <span class="text">{text}</span>
                <span>by <small class="author">{author}</small></span>
                <div class="tags">Tags: {tags}</div>
            </div>"#
        )
    }

    fn page(body: &str) -> String {
        format!("<html><body><div class=\"container\">{body}</div></body></html>")
    }

    #[test]
    fn test_two_quotes_and_next_page() {
        let html = page(&format!(
            r#"{}{}<nav><ul class="pager"><li class="next"><a href="/page/2/">Next</a></li></ul></nav>"#,
            container("First quote.", "Ann Author", &["life", "love"]),
            container("Second quote.", "Bob Writer", &[]),
        ));

        let result = html::parse(&html).unwrap();
        assert_eq!(
            result.quotes,
            vec![
                Quote::new(
                    "First quote.",
                    "Ann Author",
                    vec!["life".to_string(), "love".to_string()]
                ),
                Quote::new("Second quote.", "Bob Writer", Vec::new()),
            ]
        );
        assert_eq!(result.next_page.as_deref(), Some("/page/2/"));
        assert!(!result.is_last());
    }

    #[test]
    fn test_document_order_is_preserved() {
        let body = (0..10)
            .map(|i| container(&format!("Quote {i}"), &format!("Author {i}"), &["a", "b", "c"]))
            .collect::<String>();

        let result = html::parse(&page(&body)).unwrap();
        assert_eq!(result.quotes.len(), 10);
        for (i, quote) in result.quotes.iter().enumerate() {
            assert_eq!(quote.text, format!("Quote {i}"));
            assert_eq!(quote.author, format!("Author {i}"));
            assert_eq!(quote.tags, vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn test_no_pager_means_last_page() {
        let html = page(&container("Only.", "Someone", &["x"]));
        let result = html::parse(&html).unwrap();
        assert_eq!(result.quotes.len(), 1);
        assert_eq!(result.next_page, None);
        assert!(result.is_last());
    }

    #[test]
    fn test_previous_link_is_not_next() {
        let html = page(&format!(
            r#"{}<ul class="pager"><li class="previous"><a href="/page/9/">Previous</a></li></ul>"#,
            container("Last.", "Someone", &[]),
        ));
        let result = html::parse(&html).unwrap();
        assert_eq!(result.next_page, None);
    }

    #[test]
    fn test_empty_page() {
        let result = html::parse("<html><body><p>No quotes found!</p></body></html>").unwrap();
        assert!(result.quotes.is_empty());
        assert!(result.is_last());
    }

    #[test]
    fn test_text_is_taken_verbatim() {
        let html = page(&container(
            "\u{201c}A day without sunshine is like, you know, night.\u{201d}",
            "Steve Martin",
            &["humor"],
        ));
        let result = html::parse(&html).unwrap();
        assert_eq!(
            result.quotes[0].text,
            "\u{201c}A day without sunshine is like, you know, night.\u{201d}"
        );
    }

    #[test]
    fn test_nested_markup_text_is_concatenated() {
        let html = page(
            r#"<div class="quote">
                <span class="text">Be <b>bold</b>.</span>
                <small class="author">Jane &amp; John</small>
            </div>"#,
        );
        let result = html::parse(&html).unwrap();
        assert_eq!(result.quotes[0].text, "Be bold.");
        assert_eq!(result.quotes[0].author, "Jane & John");
    }

    #[test]
    fn test_missing_author_is_error_by_default() {
        let html = page(&format!(
            r#"{}<div class="quote"><span class="text">Orphan.</span></div>"#,
            container("Fine.", "Someone", &[]),
        ));

        let err = html::parse(&html).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::MalformedDocument {
                index: Some(1),
                missing: "author"
            }
        ));
    }

    #[test]
    fn test_blank_text_counts_as_missing() {
        let html = page(r#"<div class="quote"><span class="text">  </span><small class="author">A</small></div>"#);
        let err = html::extract(&html, MalformedPolicy::Error).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::MalformedDocument {
                index: Some(0),
                missing: "text"
            }
        ));
    }

    #[test]
    fn test_skip_policy_drops_malformed_containers() {
        let html = page(&format!(
            r#"{}<div class="quote"><small class="author">No Text</small></div>{}"#,
            container("One.", "A", &[]),
            container("Two.", "B", &["t"]),
        ));

        let result = html::extract(&html, MalformedPolicy::Skip).unwrap();
        let texts: Vec<_> = result.quotes.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["One.", "Two."]);
    }

    #[test]
    fn test_pager_without_link_is_error() {
        let html = page(r#"<ul class="pager"><li class="next">Next</li></ul>"#);
        let err = html::extract(&html, MalformedPolicy::Skip).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::MalformedDocument {
                index: None,
                missing: "next page link"
            }
        ));
    }

    #[test]
    fn test_absolute_next_link_is_returned_as_is() {
        let html = page(r#"<li class="next"><a href="https://example.com/page/7/">Next</a></li>"#);
        let result = html::parse(&html).unwrap();
        assert_eq!(result.next_page.as_deref(), Some("https://example.com/page/7/"));
    }
}
