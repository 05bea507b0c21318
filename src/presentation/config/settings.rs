use std::path::PathBuf;
use std::time::Duration;

use crate::domain::CleaningPolicy;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub engine: EngineSettings,
    pub audio: AudioSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub binary_path: PathBuf,
    pub model_path: PathBuf,
    pub language: String,
    /// Upper bound on each external process; absent in the baseline.
    pub process_timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct AudioSettings {
    pub converter_binary: PathBuf,
    pub scratch_dir: PathBuf,
    pub cleaning_policy: CleaningPolicy,
}

#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// When set, requests must carry it in the `x-whisper-key` header.
    pub secret: Option<String>,
}

impl Settings {
    /// Read configuration from the environment once at startup. Core logic
    /// only ever sees this immutable struct.
    pub fn from_env() -> Result<Self, String> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| format!("Invalid PORT: {}", raw))?,
            Err(_) => 3000,
        };

        let process_timeout = match std::env::var("PROCESS_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(
                raw.parse()
                    .map_err(|_| format!("Invalid PROCESS_TIMEOUT_SECS: {}", raw))?,
            )),
            Err(_) => None,
        };

        let cleaning_policy = match std::env::var("CLEANING_POLICY") {
            Ok(raw) => CleaningPolicy::try_from(raw)?,
            Err(_) => CleaningPolicy::FirstUtterance,
        };

        Ok(Self {
            server: ServerSettings { port },
            engine: EngineSettings {
                binary_path: std::env::var("WHISPER_BINARY")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("/usr/local/bin/whisper")),
                model_path: std::env::var("MODEL_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("/models/ggml-small.bin")),
                language: std::env::var("WHISPER_LANGUAGE").unwrap_or_else(|_| "id".to_string()),
                process_timeout,
            },
            audio: AudioSettings {
                converter_binary: std::env::var("FFMPEG_BINARY")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("ffmpeg")),
                scratch_dir: std::env::var("SCRATCH_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| std::env::temp_dir()),
                cleaning_policy,
            },
            auth: AuthSettings {
                secret: std::env::var("WHISPER_SECRET")
                    .ok()
                    .filter(|s| !s.is_empty()),
            },
        })
    }
}
