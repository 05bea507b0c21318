use std::path::PathBuf;
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{
    AudioFetcher, AudioNormalizer, EngineError, EngineOutput, NormalizeError, TranscriptionEngine,
};
use crate::application::services::input_resolver::{InputResolver, ResolveError};
use crate::application::services::transcript_cleaner::clean_transcript;
use crate::domain::{CleaningPolicy, StagedFile, StagedRole, TranscribeRequest};

/// Sequences one transcription request end to end: preflight, input
/// staging, normalization, engine invocation, output extraction. Staged
/// files are owned here and removed on every exit path.
pub struct TranscriptionService<F, N, E>
where
    F: AudioFetcher,
    N: AudioNormalizer,
    E: TranscriptionEngine,
{
    resolver: InputResolver<F>,
    normalizer: Arc<N>,
    engine: Arc<E>,
    scratch_dir: PathBuf,
    cleaning_policy: CleaningPolicy,
}

impl<F, N, E> TranscriptionService<F, N, E>
where
    F: AudioFetcher,
    N: AudioNormalizer,
    E: TranscriptionEngine,
{
    pub fn new(
        resolver: InputResolver<F>,
        normalizer: Arc<N>,
        engine: Arc<E>,
        scratch_dir: PathBuf,
        cleaning_policy: CleaningPolicy,
    ) -> Self {
        Self {
            resolver,
            normalizer,
            engine,
            scratch_dir,
            cleaning_policy,
        }
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn transcribe(&self, request: &TranscribeRequest) -> Result<String, PipelineError> {
        // Configuration problems must surface before any scratch file exists.
        self.engine.preflight()?;

        let input = self.resolver.resolve(request).await?;

        let token = Uuid::new_v4();
        let wav = StagedFile::new(
            self.scratch_dir.join(format!("converted-{}.wav", token)),
            StagedRole::NormalizedWav,
        );
        self.normalizer.normalize(input.path(), wav.path()).await?;

        let output_base = self.scratch_dir.join(format!("result-{}", token));
        let EngineOutput {
            captured,
            transcript_path,
        } = self.engine.transcribe(wav.path(), &output_base).await?;
        let transcript_file = StagedFile::new(transcript_path, StagedRole::EngineTranscript);

        // The engine's own text file is authoritative when it has content;
        // the captured stream is the fallback.
        let raw = match tokio::fs::read_to_string(transcript_file.path()).await {
            Ok(contents) if !contents.trim().is_empty() => contents.trim().to_string(),
            _ => captured.trim().to_string(),
        };

        let text = clean_transcript(&raw, self.cleaning_policy);
        tracing::info!(chars = text.len(), policy = %self.cleaning_policy, "Transcription completed");
        Ok(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("no audio provided")]
    NoAudio,
    #[error("invalid audio payload: {0}")]
    InvalidPayload(String),
    #[error("{0}")]
    UpstreamFetch(String),
    #[error("{0}")]
    Configuration(String),
    #[error("audio normalization failed")]
    Normalization { details: String },
    #[error("transcription failed")]
    Engine { details: String },
    #[error("unexpected i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ResolveError> for PipelineError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::NoAudio => Self::NoAudio,
            ResolveError::InvalidBase64(reason) => Self::InvalidPayload(reason),
            ResolveError::Fetch(fetch) => Self::UpstreamFetch(fetch.to_string()),
            ResolveError::Io(io) => Self::Io(io),
        }
    }
}

impl From<NormalizeError> for PipelineError {
    fn from(e: NormalizeError) -> Self {
        match e {
            NormalizeError::Spawn(reason) => {
                Self::Configuration(format!("audio converter unavailable: {}", reason))
            }
            NormalizeError::ConversionFailed { details, .. } => Self::Normalization { details },
            NormalizeError::TimedOut(secs) => Self::Normalization {
                details: format!("converter timed out after {} seconds", secs),
            },
        }
    }
}

impl From<EngineError> for PipelineError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::BinaryMissing(_) | EngineError::ModelMissing(_) => {
                Self::Configuration(e.to_string())
            }
            EngineError::Spawn(reason) => {
                Self::Configuration(format!("failed to spawn engine: {}", reason))
            }
            EngineError::EngineFailed { details, .. } => Self::Engine { details },
            EngineError::TimedOut(secs) => Self::Engine {
                details: format!("engine timed out after {} seconds", secs),
            },
        }
    }
}
