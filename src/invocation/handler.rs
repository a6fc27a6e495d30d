use super::{InvocationEvent, InvocationResponse};
use crate::errors::Result;
use crate::scraper::{FieldExtractor, ListingHarvester, PageFetcher};
use crate::storage::{upload_listings, ObjectStore};
use chrono::{DateTime, Utc};
use tracing::info;

/// One complete invocation: validate input, harvest, persist, summarize.
/// Every error is fatal and returned as-is; an empty harvest is a 204 and
/// writes nothing.
pub fn handle_invocation(
    event: &InvocationEvent,
    fetcher: &dyn PageFetcher,
    store: &dyn ObjectStore,
    bucket: &str,
    now: DateTime<Utc>,
) -> Result<InvocationResponse> {
    let page_count = event.page_count()?;
    info!(page_count, "starting harvest");

    let harvester = ListingHarvester::new(fetcher, FieldExtractor::new()?)?;
    let result = harvester.harvest(page_count)?;

    if result.is_empty() {
        info!("no listings found");
        return Ok(InvocationResponse::no_listings());
    }

    let key = upload_listings(store, bucket, &result, now)?;
    InvocationResponse::harvested(&result, bucket, &key)
}
