mod input_resolver;
mod transcript_cleaner;
mod transcription_service;

pub use input_resolver::{InputResolver, ResolveError};
pub use transcript_cleaner::{clean_transcript, is_noise_line};
pub use transcription_service::{PipelineError, TranscriptionService};
