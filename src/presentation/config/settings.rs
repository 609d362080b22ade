use std::path::PathBuf;
use std::time::Duration;

use crate::application::services::PollConfig;
use crate::infrastructure::llm;

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub playbook: PlaybookSettings,
    pub poll: PollSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Cap on inbound request bodies. Call recordings run to tens of MB, so
    /// this must be well above the framework's 2 MiB default.
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// Absent key does not prevent startup; the analyze endpoint fails each
    /// request instead, before any external call.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PlaybookSettings {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct PollSettings {
    pub initial_backoff_secs: u64,
    pub max_backoff_secs: u64,
    pub timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Self {
        let default_poll = PollConfig::default();

        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed("SERVER_PORT", 3000),
                max_upload_bytes: env_parsed("MAX_UPLOAD_SIZE_BYTES", 1073741824),
            },
            gemini: GeminiSettings {
                api_key: std::env::var("GOOGLE_API_KEY")
                    .ok()
                    .filter(|k| !k.trim().is_empty()),
                model: env_or("GEMINI_MODEL", llm::DEFAULT_MODEL),
                base_url: std::env::var("GEMINI_BASE_URL").ok(),
            },
            playbook: PlaybookSettings {
                path: PathBuf::from(env_or("PLAYBOOK_PATH", "playbook.txt")),
            },
            poll: PollSettings {
                initial_backoff_secs: env_parsed(
                    "AUDIO_POLL_INITIAL_BACKOFF_SECS",
                    default_poll.initial_backoff.as_secs(),
                ),
                max_backoff_secs: env_parsed(
                    "AUDIO_POLL_MAX_BACKOFF_SECS",
                    default_poll.max_backoff.as_secs(),
                ),
                timeout_secs: env_parsed(
                    "AUDIO_POLL_TIMEOUT_SECS",
                    default_poll.timeout.as_secs(),
                ),
            },
        }
    }

    pub fn poll_config(&self) -> PollConfig {
        PollConfig {
            initial_backoff: Duration::from_secs(self.poll.initial_backoff_secs),
            max_backoff: Duration::from_secs(self.poll.max_backoff_secs),
            timeout: Duration::from_secs(self.poll.timeout_secs),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
