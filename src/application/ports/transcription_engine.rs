use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Output of one engine invocation. `captured` holds stdout and stderr
/// concatenated; `transcript_path` is where the engine was asked to write
/// its plain-text result (the file may or may not exist).
#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub captured: String,
    pub transcript_path: PathBuf,
}

/// The external speech-recognition executable.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Verify the engine can run at all (binary and model present).
    /// Called before any request scratch files are created.
    fn preflight(&self) -> Result<(), EngineError>;

    /// Run the engine against a normalized waveform. `output_base` is the
    /// extension-less prefix for the engine's own text output file.
    async fn transcribe(&self, wav: &Path, output_base: &Path)
    -> Result<EngineOutput, EngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("whisper binary not found at {}", .0.display())]
    BinaryMissing(PathBuf),
    #[error("model not found at {}", .0.display())]
    ModelMissing(PathBuf),
    #[error("failed to spawn engine: {0}")]
    Spawn(String),
    #[error("engine exited with status {status}")]
    EngineFailed { status: i32, details: String },
    #[error("engine timed out after {0} seconds")]
    TimedOut(u64),
}
