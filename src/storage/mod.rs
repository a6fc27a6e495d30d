mod fs;
mod http;

pub use fs::FsObjectStore;
pub use http::HttpObjectStore;

use crate::errors::Result;
use crate::scraper::HarvestResult;
use chrono::{DateTime, Utc};
use tracing::info;

pub const KEY_PREFIX: &str = "zameen/json";

/// Durable destination for harvest artifacts.
pub trait ObjectStore {
    fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> Result<()>;
}

pub fn listing_key(now: DateTime<Utc>) -> String {
    format!("{KEY_PREFIX}/listings_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Writes the harvest as a JSON array and returns the key it was stored under.
pub fn upload_listings(
    store: &dyn ObjectStore,
    bucket: &str,
    result: &HarvestResult,
    now: DateTime<Utc>,
) -> Result<String> {
    let key = listing_key(now);
    let body = serde_json::to_vec(result)?;
    let bytes = body.len();

    store.put_object(bucket, &key, body, mime::APPLICATION_JSON.essence_str())?;

    info!(bucket, %key, bytes, records = result.len(), "uploaded listings");
    Ok(key)
}
