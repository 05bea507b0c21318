use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{EngineError, EngineOutput, TranscriptionEngine};
use crate::infrastructure::process::{CommandError, run_captured};

/// whisper.cpp CLI invocation with plain-text file output.
pub struct WhisperCliEngine {
    binary_path: PathBuf,
    model_path: PathBuf,
    language: String,
    timeout: Option<Duration>,
}

impl WhisperCliEngine {
    pub fn new(
        binary_path: PathBuf,
        model_path: PathBuf,
        language: String,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            binary_path,
            model_path,
            language,
            timeout,
        }
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperCliEngine {
    fn preflight(&self) -> Result<(), EngineError> {
        if !self.binary_path.exists() {
            return Err(EngineError::BinaryMissing(self.binary_path.clone()));
        }
        if !self.model_path.exists() {
            return Err(EngineError::ModelMissing(self.model_path.clone()));
        }
        Ok(())
    }

    async fn transcribe(
        &self,
        wav: &Path,
        output_base: &Path,
    ) -> Result<EngineOutput, EngineError> {
        let mut command = Command::new(&self.binary_path);
        command
            .arg("-m")
            .arg(&self.model_path)
            .arg("-f")
            .arg(wav)
            .arg("--language")
            .arg(&self.language)
            .arg("-otxt")
            .arg("-of")
            .arg(output_base);

        tracing::debug!(
            binary = %self.binary_path.display(),
            model = %self.model_path.display(),
            wav = %wav.display(),
            language = %self.language,
            "Invoking whisper"
        );

        let capture = run_captured(command, self.timeout)
            .await
            .map_err(|e| match e {
                CommandError::TimedOut { timeout, .. } => EngineError::TimedOut(timeout.as_secs()),
                other => EngineError::Spawn(other.to_string()),
            })?;

        if !capture.success {
            tracing::error!(status = capture.exit_code, "Whisper invocation failed");
            return Err(EngineError::EngineFailed {
                status: capture.exit_code,
                details: capture.combined,
            });
        }

        // `-of` takes a prefix; the engine writes `<prefix>.txt`.
        let mut transcript_path = output_base.as_os_str().to_owned();
        transcript_path.push(".txt");

        Ok(EngineOutput {
            captured: capture.combined,
            transcript_path: PathBuf::from(transcript_path),
        })
    }
}
