use std::sync::Arc;

use crate::application::ports::{AudioFetcher, AudioNormalizer, TranscriptionEngine};
use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

pub struct AppState<F, N, E>
where
    F: AudioFetcher,
    N: AudioNormalizer,
    E: TranscriptionEngine,
{
    pub transcription_service: Arc<TranscriptionService<F, N, E>>,
    pub settings: Settings,
}

impl<F, N, E> Clone for AppState<F, N, E>
where
    F: AudioFetcher,
    N: AudioNormalizer,
    E: TranscriptionEngine,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            settings: self.settings.clone(),
        }
    }
}
