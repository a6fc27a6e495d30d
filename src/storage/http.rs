use super::ObjectStore;
use crate::errors::{HarvestError, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

/// Writes objects with a plain `PUT <endpoint>/<bucket>/<key>`, for
/// S3-compatible gateways that accept unsigned uploads.
pub struct HttpObjectStore {
    client: Client,
    endpoint: Url,
}

impl HttpObjectStore {
    pub fn new(endpoint: &str) -> Result<Self> {
        let mut endpoint = Url::parse(endpoint)
            .map_err(|e| HarvestError::Config(format!("invalid object store endpoint: {e}")))?;
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        let client = Client::builder()
            .build()
            .map_err(|e| HarvestError::Storage(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn object_url(&self, bucket: &str, key: &str) -> Result<Url> {
        self.endpoint
            .join(&format!("{bucket}/{key}"))
            .map_err(|e| HarvestError::Storage(format!("bad object url: {e}")))
    }
}

impl ObjectStore for HttpObjectStore {
    fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        let url = self.object_url(bucket, key)?;

        let response = self
            .client
            .put(url.clone())
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .map_err(|e| HarvestError::Storage(format!("PUT {url} failed: {e}")))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let text = response.text().unwrap_or_else(|_| "(no body)".to_string());
            Err(HarvestError::Storage(format!(
                "PUT {url} returned {status}: {text}"
            )))
        }
    }
}
