use super::asset_state::AssetState;

/// Opaque handle to an audio file uploaded to the model provider.
///
/// `name` is the provider-side resource name used for state lookups;
/// `uri` is what completion requests reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioAsset {
    pub name: String,
    pub uri: String,
    pub mime_type: String,
    pub state: AssetState,
}

impl AudioAsset {
    pub fn new(
        name: impl Into<String>,
        uri: impl Into<String>,
        mime_type: impl Into<String>,
        state: AssetState,
    ) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            mime_type: mime_type.into(),
            state,
        }
    }
}
