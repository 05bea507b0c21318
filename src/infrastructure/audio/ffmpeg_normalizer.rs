use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioNormalizer, NormalizeError};
use crate::infrastructure::process::{CommandError, run_captured};

const TARGET_SAMPLE_RATE: u32 = 16_000;
const TARGET_CHANNELS: u32 = 1;

/// ffmpeg-backed transcode of arbitrary input audio to mono 16 kHz WAV.
pub struct FfmpegNormalizer {
    binary: PathBuf,
    timeout: Option<Duration>,
}

impl FfmpegNormalizer {
    pub fn new(binary: PathBuf, timeout: Option<Duration>) -> Self {
        Self { binary, timeout }
    }
}

#[async_trait]
impl AudioNormalizer for FfmpegNormalizer {
    async fn normalize(&self, input: &Path, output: &Path) -> Result<(), NormalizeError> {
        let mut command = Command::new(&self.binary);
        command
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg("-ar")
            .arg(TARGET_SAMPLE_RATE.to_string())
            .arg("-ac")
            .arg(TARGET_CHANNELS.to_string())
            .arg(output);

        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            "Converting audio to 16 kHz mono WAV"
        );

        let capture = run_captured(command, self.timeout)
            .await
            .map_err(|e| match e {
                CommandError::TimedOut { timeout, .. } => NormalizeError::TimedOut(timeout.as_secs()),
                other => NormalizeError::Spawn(other.to_string()),
            })?;

        if !capture.success {
            tracing::warn!(status = capture.exit_code, "Audio conversion failed");
            return Err(NormalizeError::ConversionFailed {
                status: capture.exit_code,
                details: capture.combined,
            });
        }

        Ok(())
    }
}
