// errors.rs
use crate::scraper::ScraperError;
use thiserror::Error;

/// Every fatal condition of one invocation. Missing fields and empty
/// harvests are not errors and never end up here.
#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Fetch failed: {0}")]
    Fetch(ScraperError),

    #[error("Parse error: {0}")]
    Parse(ScraperError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ScraperError> for HarvestError {
    fn from(err: ScraperError) -> Self {
        match err {
            ScraperError::HtmlParse(_) => HarvestError::Parse(err),
            _ => HarvestError::Fetch(err),
        }
    }
}

impl HarvestError {
    /// HTTP status used when the error surfaces through the serve mode.
    pub fn status_code(&self) -> u16 {
        match self {
            HarvestError::InvalidInput(_) => 400,
            HarvestError::Fetch(_) => 502,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
