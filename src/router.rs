use crate::errors::HarvestError;
use crate::invocation::{handle_invocation, InvocationEvent};
use crate::responses::{invocation_response, json_response, ResultResp};
use crate::scraper::PageFetcher;
use crate::storage::ObjectStore;
use astra::Request;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;

/// Collaborators shared by every request in serve mode.
pub struct App {
    pub bucket: String,
    pub fetcher: Box<dyn PageFetcher + Send + Sync>,
    pub store: Box<dyn ObjectStore + Send + Sync>,
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/health") => json_response(200, &json!({ "status": "ok" })),
        ("GET", "/harvest") => {
            let event = InvocationEvent::with_query(parse_query(&req));
            let inv = handle_invocation(
                &event,
                app.fetcher.as_ref(),
                app.store.as_ref(),
                &app.bucket,
                Utc::now(),
            )?;
            invocation_response(inv)
        }
        _ => json_response(404, &json!({ "error": "Not Found" })),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for (k, v) in url::form_urlencoded::parse(q.as_bytes()) {
            map.insert(k.into_owned(), v.into_owned());
        }
    }

    map
}

/// True when the caller's input caused the failure.
pub fn is_client_error(err: &HarvestError) -> bool {
    err.status_code() < 500
}
