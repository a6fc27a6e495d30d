// harvester.rs
use crate::scraper::anchors::{LISTING_SELECTOR, SITE_ORIGIN};
use crate::scraper::extractor::FieldExtractor;
use crate::scraper::fetcher::PageFetcher;
use crate::scraper::models::{HarvestResult, ListingRecord};
use crate::scraper::ScraperError;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};

pub const DEFAULT_PAGE_COUNT: u32 = 10;

/// Results page `page` (1-based) of the Lahore homes search.
pub fn page_url(page: u32) -> String {
    format!("{SITE_ORIGIN}/Homes/Lahore-1-{page}.html")
}

/// Drives fetch, parse and extract over a fixed range of pages. Owns its
/// collaborators for the lifetime of one invocation.
pub struct ListingHarvester<F: PageFetcher> {
    fetcher: F,
    extractor: FieldExtractor,
    listing_selector: Selector,
}

impl<F: PageFetcher> ListingHarvester<F> {
    pub fn new(fetcher: F, extractor: FieldExtractor) -> Result<Self, ScraperError> {
        let listing_selector = Selector::parse(LISTING_SELECTOR)
            .map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

        Ok(Self {
            fetcher,
            extractor,
            listing_selector,
        })
    }

    /// Fetches pages `1..=page_count` in order. The first failing page aborts
    /// the whole harvest; nothing collected so far is returned.
    pub fn harvest(&self, page_count: u32) -> Result<HarvestResult, ScraperError> {
        let mut records = Vec::new();

        for page in 1..=page_count {
            let url = page_url(page);
            debug!(page, %url, "fetching results page");

            let html = self.fetcher.fetch(&url).map_err(|e| {
                warn!(page, %url, error = %e, "page fetch failed, aborting harvest");
                e
            })?;

            let found = self.extract_page(&html);
            info!(page, listings = found.len(), "page parsed");
            records.extend(found);
        }

        info!(pages = page_count, total = records.len(), "harvest complete");
        Ok(HarvestResult::new(records))
    }

    /// Every listing on one page, in document order.
    pub fn extract_page(&self, html: &str) -> Vec<ListingRecord> {
        let document = Html::parse_document(html);

        document
            .select(&self.listing_selector)
            .map(|node| self.extractor.extract(node))
            .collect()
    }
}
