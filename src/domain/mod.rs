mod audio_source;
mod cleaning_policy;
mod staged_file;

pub use audio_source::{AudioSource, TranscribeRequest, UploadedAudio};
pub use cleaning_policy::CleaningPolicy;
pub use staged_file::{StagedFile, StagedRole};
