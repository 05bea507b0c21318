use std::path::Path;

use async_trait::async_trait;

/// Transcodes arbitrary input audio into the mono 16 kHz waveform the
/// engine expects. Pure format pass-through; never inspects content.
#[async_trait]
pub trait AudioNormalizer: Send + Sync {
    async fn normalize(&self, input: &Path, output: &Path) -> Result<(), NormalizeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("failed to spawn converter: {0}")]
    Spawn(String),
    #[error("converter exited with status {status}")]
    ConversionFailed { status: i32, details: String },
    #[error("converter timed out after {0} seconds")]
    TimedOut(u64),
}
