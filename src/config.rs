use crate::errors::{HarvestError, Result};
use crate::storage::{FsObjectStore, HttpObjectStore, ObjectStore};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_STORE_ROOT: &str = "object-store";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bucket_name: String,
    pub store_endpoint: Option<String>,
    pub store_root: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let bucket_name = lookup("BUCKET_NAME")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| HarvestError::Config("BUCKET_NAME must be set".into()))?;

        let store_endpoint = lookup("OBJECT_STORE_ENDPOINT").filter(|v| !v.trim().is_empty());

        let store_root: PathBuf = lookup("OBJECT_STORE_ROOT")
            .unwrap_or_else(|| DEFAULT_STORE_ROOT.to_string())
            .into();

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| HarvestError::Config(format!("BIND_ADDR must be host:port: {e}")))?;

        Ok(Self {
            bucket_name,
            store_endpoint,
            store_root,
            bind_addr,
        })
    }

    /// HTTP store when an endpoint is configured, files otherwise.
    pub fn object_store(&self) -> Result<Box<dyn ObjectStore + Send + Sync>> {
        match &self.store_endpoint {
            Some(endpoint) => Ok(Box::new(HttpObjectStore::new(endpoint)?)),
            None => Ok(Box::new(FsObjectStore::new(self.store_root.clone()))),
        }
    }
}
