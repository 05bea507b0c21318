mod settings;

pub use settings::{AudioSettings, AuthSettings, EngineSettings, ServerSettings, Settings};
