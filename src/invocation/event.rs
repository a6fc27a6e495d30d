use crate::errors::{HarvestError, Result};
use crate::scraper::DEFAULT_PAGE_COUNT;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// API-gateway style trigger. Only the query parameters are read; other
/// parameters may carry any JSON value and are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvocationEvent {
    #[serde(rename = "queryStringParameters", default)]
    pub query_string_parameters: Option<HashMap<String, Value>>,
}

impl InvocationEvent {
    pub fn with_query(params: HashMap<String, String>) -> Self {
        let params = params
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        Self {
            query_string_parameters: Some(params),
        }
    }

    /// `pages` override, or the default bound. Accepts a JSON number or a
    /// numeric string; anything other than a positive integer is rejected.
    pub fn page_count(&self) -> Result<u32> {
        let raw = match self
            .query_string_parameters
            .as_ref()
            .and_then(|q| q.get("pages"))
        {
            Some(raw) => raw,
            None => return Ok(DEFAULT_PAGE_COUNT),
        };

        let pages = match raw {
            Value::String(s) => s.trim().parse::<u32>().map_err(|e| {
                HarvestError::InvalidInput(format!(
                    "pages must be a positive integer, got {s:?}: {e}"
                ))
            })?,
            Value::Number(n) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| {
                    HarvestError::InvalidInput(format!(
                        "pages must be a positive integer, got {n}"
                    ))
                })?,
            other => {
                return Err(HarvestError::InvalidInput(format!(
                    "pages must be a positive integer, got {other}"
                )))
            }
        };

        if pages == 0 {
            return Err(HarvestError::InvalidInput(
                "pages must be at least 1".to_string(),
            ));
        }
        Ok(pages)
    }
}
