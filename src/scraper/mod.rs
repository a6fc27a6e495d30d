pub mod anchors;
mod extractor;
mod fetcher;
mod harvester;
mod models;
mod scraper_error;

pub use extractor::FieldExtractor;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use harvester::{page_url, ListingHarvester, DEFAULT_PAGE_COUNT};
pub use models::{Field, HarvestResult, ListingRecord};
pub use scraper_error::ScraperError;
