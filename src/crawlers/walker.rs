use crate::config::{MalformedPolicy, ScraperConfig};
use crate::crawlers::Fetcher;
use crate::error::ScrapeError;
use crate::parsers;
use crate::results::{Quote, QuotePage};
use crate::utils::resolve_page_url;

/// Follows the "next" links of a paginated listing and collects every quote
///
/// Pages are fetched strictly one after another. The first failing fetch or
/// parse aborts the walk and nothing gathered so far is returned.
pub struct PageWalker<F> {
    fetcher: F,
    base_url: String,
    start_path: String,
    max_pages: Option<usize>,
    policy: MalformedPolicy,
}

impl<F: Fetcher> PageWalker<F> {
    /// Create a walker using the site settings from `config`
    pub fn new(fetcher: F, config: &ScraperConfig) -> Self {
        Self {
            fetcher,
            base_url: config.base_url.clone(),
            start_path: config.start_path.clone(),
            max_pages: config.max_pages,
            policy: config.on_malformed,
        }
    }

    /// Fetch and extract a single page
    pub async fn scrape_page(&self, page: &str) -> Result<QuotePage, ScrapeError> {
        let url = resolve_page_url(&self.base_url, page)?;
        let body = self.fetcher.fetch(&url).await?;
        parsers::extract(&body, self.policy)
    }

    /// Walk from the start page until a page has no next link
    pub async fn walk(&self) -> Result<Vec<Quote>, ScrapeError> {
        let mut current_page = Some(self.start_path.clone());
        let mut accumulated = Vec::new();
        let mut pages_walked = 0usize;

        while let Some(page) = current_page {
            if let Some(limit) = self.max_pages {
                if pages_walked >= limit {
                    ::log::warn!(
                        "Page limit of {} reached, not following {}",
                        limit,
                        page
                    );
                    break;
                }
            }

            ::log::info!("Scraping page {}: {}", pages_walked + 1, page);
            let result = self.scrape_page(&page).await?;
            ::log::debug!("Page {} yielded {} quotes", page, result.quotes.len());

            accumulated.extend(result.quotes);
            current_page = result.next_page;
            pages_walked += 1;
        }

        ::log::info!(
            "Walk complete - {} quotes from {} pages",
            accumulated.len(),
            pages_walked
        );
        Ok(accumulated)
    }
}
