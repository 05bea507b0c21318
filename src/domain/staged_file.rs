use std::fmt;
use std::path::{Path, PathBuf};

/// Role of a temporary artifact within one request's pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagedRole {
    RawInput,
    NormalizedWav,
    EngineTranscript,
}

impl StagedRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StagedRole::RawInput => "raw-input",
            StagedRole::NormalizedWav => "normalized-wav",
            StagedRole::EngineTranscript => "engine-transcript",
        }
    }
}

impl fmt::Display for StagedRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owning handle to a file on ephemeral storage. The file is removed on
/// drop; removal failures are traced and swallowed so cleanup can never
/// mask the pipeline outcome.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    role: StagedRole,
}

impl StagedFile {
    pub fn new(path: PathBuf, role: StagedRole) -> Self {
        Self { path, role }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn role(&self) -> StagedRole {
        self.role
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(
                    path = %self.path.display(),
                    role = %self.role,
                    error = %e,
                    "Failed to remove staged file"
                );
            }
        }
    }
}
