use crate::errors::Result;
use crate::scraper::{HarvestResult, ListingRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SAMPLE_SIZE: usize = 5;

pub const NO_LISTINGS_BODY: &str = r#"{"message": "No listings found"}"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct HarvestSummary<'a> {
    total_listings: usize,
    s3_bucket: &'a str,
    s3_key: &'a str,
    sample: &'a [ListingRecord],
}

impl InvocationResponse {
    fn json(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            "Content-Type".to_string(),
            mime::APPLICATION_JSON.to_string(),
        );
        Self {
            status_code,
            body,
            headers,
        }
    }

    pub fn no_listings() -> Self {
        Self::json(204, NO_LISTINGS_BODY.to_string())
    }

    pub fn harvested(result: &HarvestResult, bucket: &str, key: &str) -> Result<Self> {
        let summary = HarvestSummary {
            total_listings: result.len(),
            s3_bucket: bucket,
            s3_key: key,
            sample: result.sample(SAMPLE_SIZE),
        };
        Ok(Self::json(200, serde_json::to_string(&summary)?))
    }
}
