use std::fmt;
use std::str::FromStr;

/// Processing state of a file uploaded to the model provider.
///
/// The provider owns this state; we only observe it while polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetState {
    Pending,
    Ready,
    Failed,
}

impl AssetState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetState::Pending => "PROCESSING",
            AssetState::Ready => "ACTIVE",
            AssetState::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, AssetState::Pending)
    }
}

impl FromStr for AssetState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PROCESSING" | "STATE_UNSPECIFIED" => Ok(AssetState::Pending),
            "ACTIVE" => Ok(AssetState::Ready),
            "FAILED" => Ok(AssetState::Failed),
            _ => Err(format!("Invalid asset state: {}", s)),
        }
    }
}

impl fmt::Display for AssetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
