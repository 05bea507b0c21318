mod ffmpeg_normalizer;
mod whisper_cli_engine;

pub use ffmpeg_normalizer::FfmpegNormalizer;
pub use whisper_cli_engine::WhisperCliEngine;
