use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use uuid::Uuid;

use crate::application::ports::{AudioFetcher, FetchError};
use crate::domain::{AudioSource, StagedFile, StagedRole, TranscribeRequest, UploadedAudio};

const DEFAULT_EXTENSION: &str = "webm";

/// Turns one of the three request audio sources into a staged local file.
pub struct InputResolver<F: AudioFetcher> {
    fetcher: Arc<F>,
    scratch_dir: PathBuf,
}

impl<F: AudioFetcher> InputResolver<F> {
    pub fn new(fetcher: Arc<F>, scratch_dir: PathBuf) -> Self {
        Self {
            fetcher,
            scratch_dir,
        }
    }

    /// Produce exactly one local audio file, honoring the source
    /// precedence upload > remote URL > inline base64.
    pub async fn resolve(&self, request: &TranscribeRequest) -> Result<StagedFile, ResolveError> {
        match request.source() {
            Some(AudioSource::Upload(upload)) => self.stage_upload(upload).await,
            Some(AudioSource::RemoteUrl(url)) => self.stage_remote(url).await,
            Some(AudioSource::InlineBase64(encoded)) => self.stage_inline(encoded).await,
            None => {
                tracing::warn!("Transcription request with no audio source");
                Err(ResolveError::NoAudio)
            }
        }
    }

    async fn stage_upload(&self, upload: &UploadedAudio) -> Result<StagedFile, ResolveError> {
        let extension = upload
            .filename
            .as_deref()
            .and_then(extension_of)
            .unwrap_or(DEFAULT_EXTENSION);
        let staged = self.staged_input(extension);
        tokio::fs::write(staged.path(), &upload.data).await?;

        tracing::debug!(
            path = %staged.path().display(),
            bytes = upload.data.len(),
            "Staged uploaded audio"
        );
        Ok(staged)
    }

    async fn stage_remote(&self, url: &str) -> Result<StagedFile, ResolveError> {
        let staged = self.staged_input(url_extension(url));
        let bytes = self.fetcher.fetch_to_file(url, staged.path()).await?;

        tracing::debug!(path = %staged.path().display(), bytes, "Staged remote audio");
        Ok(staged)
    }

    async fn stage_inline(&self, encoded: &str) -> Result<StagedFile, ResolveError> {
        let data = BASE64
            .decode(encoded.trim())
            .map_err(|e| ResolveError::InvalidBase64(e.to_string()))?;
        let staged = self.staged_input(DEFAULT_EXTENSION);
        tokio::fs::write(staged.path(), &data).await?;

        tracing::debug!(
            path = %staged.path().display(),
            bytes = data.len(),
            "Staged inline audio payload"
        );
        Ok(staged)
    }

    fn staged_input(&self, extension: &str) -> StagedFile {
        let name = format!("input-{}.{}", Uuid::new_v4(), extension);
        StagedFile::new(self.scratch_dir.join(name), StagedRole::RawInput)
    }
}

/// File-format hint from the URL path component, query string stripped.
fn url_extension(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    extension_of(path).unwrap_or(DEFAULT_EXTENSION)
}

fn extension_of(name: &str) -> Option<&str> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("no audio provided")]
    NoAudio,
    #[error("invalid base64 audio payload: {0}")]
    InvalidBase64(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to stage audio input: {0}")]
    Io(#[from] std::io::Error),
}
