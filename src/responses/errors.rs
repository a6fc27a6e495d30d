use crate::errors::HarvestError;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

pub type ResultResp = Result<Response, HarvestError>;

/// Convert a HarvestError into a JSON error response
pub fn error_to_response(err: HarvestError) -> Response {
    json_error_response(err.status_code(), &err.to_string())
}

pub fn json_error_response(status: u16, message: &str) -> Response {
    let body = json!({ "error": message }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.essence_str())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
