use std::path::Path;

use async_trait::async_trait;

/// Downloads remote audio to local ephemeral storage.
#[async_trait]
pub trait AudioFetcher: Send + Sync {
    /// Stream the body at `url` into `dest`, returning the byte count.
    async fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<u64, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to fetch {url}: {reason}")]
    RequestFailed { url: String, reason: String },
    #[error("failed to fetch {url}: status {status}")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("failed to write downloaded audio: {0}")]
    Io(#[from] std::io::Error),
}
