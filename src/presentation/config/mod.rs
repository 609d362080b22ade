mod settings;

pub use settings::{GeminiSettings, PlaybookSettings, PollSettings, ServerSettings, Settings};
