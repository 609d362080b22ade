mod analysis_service;
mod prompt_builder;

pub use analysis_service::{AnalysisError, AnalysisService, PollConfig};
pub use prompt_builder::{build_audio_prompt, build_text_prompt};
