use std::str::FromStr;

use callcoach::domain::AssetState;

#[test]
fn given_provider_vocabulary_when_parsing_then_maps_to_states() {
    assert_eq!(AssetState::from_str("PROCESSING").unwrap(), AssetState::Pending);
    assert_eq!(
        AssetState::from_str("STATE_UNSPECIFIED").unwrap(),
        AssetState::Pending
    );
    assert_eq!(AssetState::from_str("ACTIVE").unwrap(), AssetState::Ready);
    assert_eq!(AssetState::from_str("FAILED").unwrap(), AssetState::Failed);
}

#[test]
fn given_unknown_state_string_when_parsing_then_returns_error() {
    let result = AssetState::from_str("EXPLODED");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("EXPLODED"));
}

#[test]
fn given_states_when_checking_terminal_then_only_pending_is_not() {
    assert!(!AssetState::Pending.is_terminal());
    assert!(AssetState::Ready.is_terminal());
    assert!(AssetState::Failed.is_terminal());
}

#[test]
fn given_state_when_displaying_then_matches_provider_string() {
    assert_eq!(AssetState::Pending.to_string(), "PROCESSING");
    assert_eq!(AssetState::Ready.to_string(), "ACTIVE");
    assert_eq!(AssetState::Failed.to_string(), "FAILED");
}
