mod asset_state;
mod audio_asset;
mod playbook;

pub use asset_state::AssetState;
pub use audio_asset::AudioAsset;
pub use playbook::Playbook;
