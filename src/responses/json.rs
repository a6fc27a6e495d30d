use crate::errors::HarvestError;
use crate::invocation::InvocationResponse;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde_json::Value;

pub fn json_response(status: u16, value: &Value) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.essence_str())
        .body(Body::from(value.to_string()))
        .map_err(|e| HarvestError::Internal(format!("response build failed: {e}")))
}

/// Replays an invocation response over HTTP, headers included.
pub fn invocation_response(inv: InvocationResponse) -> ResultResp {
    let mut builder = ResponseBuilder::new().status(inv.status_code);
    for (name, value) in &inv.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    builder
        .body(Body::from(inv.body))
        .map_err(|e| HarvestError::Internal(format!("response build failed: {e}")))
}
