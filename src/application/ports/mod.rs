mod audio_fetcher;
mod audio_normalizer;
mod transcription_engine;

pub use audio_fetcher::{AudioFetcher, FetchError};
pub use audio_normalizer::{AudioNormalizer, NormalizeError};
pub use transcription_engine::{EngineError, EngineOutput, TranscriptionEngine};
