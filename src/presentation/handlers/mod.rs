mod health;
mod transcribe;

pub use health::{health_handler, index_handler};
pub use transcribe::{AUTH_HEADER, ErrorResponse, TranscribeResponse, transcribe_handler};
