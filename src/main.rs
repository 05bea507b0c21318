use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use makassar::application::ports::TranscriptionEngine;
use makassar::application::services::{InputResolver, TranscriptionService};
use makassar::infrastructure::audio::{FfmpegNormalizer, WhisperCliEngine};
use makassar::infrastructure::http::HttpAudioFetcher;
use makassar::infrastructure::observability::{TracingConfig, init_tracing};
use makassar::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().map_err(anyhow::Error::msg)?;

    init_tracing(TracingConfig::default(), settings.server.port);

    tokio::fs::create_dir_all(&settings.audio.scratch_dir).await?;

    let fetcher = Arc::new(HttpAudioFetcher::new());
    let normalizer = Arc::new(FfmpegNormalizer::new(
        settings.audio.converter_binary.clone(),
        settings.engine.process_timeout,
    ));
    let engine = Arc::new(WhisperCliEngine::new(
        settings.engine.binary_path.clone(),
        settings.engine.model_path.clone(),
        settings.engine.language.clone(),
        settings.engine.process_timeout,
    ));

    // Surfaced again per request; the startup warning is for operators.
    if let Err(e) = engine.preflight() {
        tracing::warn!(error = %e, "Engine preflight failed at startup");
    }

    let resolver = InputResolver::new(Arc::clone(&fetcher), settings.audio.scratch_dir.clone());
    let transcription_service = Arc::new(TranscriptionService::new(
        resolver,
        normalizer,
        engine,
        settings.audio.scratch_dir.clone(),
        settings.audio.cleaning_policy,
    ));

    let state = AppState {
        transcription_service,
        settings: settings.clone(),
    };
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
