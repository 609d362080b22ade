use std::path::Path;

pub const FALLBACK_PLAYBOOK: &str =
    "Nenhum playbook foi carregado. Analise com base em boas práticas de vendas.";

/// The coaching playbook embedded into every prompt.
///
/// Loaded once at startup and read-only afterwards. A missing or unreadable
/// file degrades to the fallback instruction instead of failing startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playbook {
    text: String,
    fallback: bool,
}

impl Playbook {
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self {
                text,
                fallback: false,
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Playbook not loaded, using fallback");
                Self::fallback()
            }
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fallback: false,
        }
    }

    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_PLAYBOOK.to_string(),
            fallback: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}
