use super::ObjectStore;
use crate::errors::{HarvestError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores objects as files under `<root>/<bucket>/<key>`.
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn object_path(&self, bucket: &str, key: &str) -> PathBuf {
        self.root.join(bucket).join(key)
    }
}

impl ObjectStore for FsObjectStore {
    fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>, _content_type: &str) -> Result<()> {
        let path = self.object_path(bucket, key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| storage_err(parent, e))?;
        }
        fs::write(&path, body).map_err(|e| storage_err(&path, e))
    }
}

fn storage_err(path: &Path, e: std::io::Error) -> HarvestError {
    HarvestError::Storage(format!("write {} failed: {e}", path.display()))
}
