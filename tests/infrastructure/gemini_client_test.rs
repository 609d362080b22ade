use callcoach::application::ports::GenerativeModelError;
use callcoach::domain::AssetState;
use callcoach::infrastructure::llm::{
    FileMetadata, FileUploadResponse, GenerateContentResponse, extract_text,
};

#[test]
fn given_upload_response_when_parsing_then_builds_asset() {
    let json = r#"{
        "file": {
            "name": "files/abc-123",
            "uri": "https://generativelanguage.googleapis.com/v1beta/files/abc-123",
            "mimeType": "audio/mpeg",
            "state": "PROCESSING"
        }
    }"#;

    let parsed: FileUploadResponse = serde_json::from_str(json).unwrap();
    let asset = parsed.file.into_asset().unwrap();

    assert_eq!(asset.name, "files/abc-123");
    assert_eq!(asset.mime_type, "audio/mpeg");
    assert_eq!(asset.state, AssetState::Pending);
}

#[test]
fn given_file_metadata_when_state_is_active_then_parses_as_ready() {
    let json = r#"{"name": "files/abc-123", "state": "ACTIVE"}"#;

    let parsed: FileMetadata = serde_json::from_str(json).unwrap();

    assert_eq!(parsed.parse_state().unwrap(), AssetState::Ready);
}

#[test]
fn given_file_metadata_when_state_is_unknown_then_parse_fails() {
    let json = r#"{"name": "files/abc-123", "state": "MELTED"}"#;

    let parsed: FileMetadata = serde_json::from_str(json).unwrap();

    assert!(matches!(
        parsed.parse_state(),
        Err(GenerativeModelError::InvalidResponse(_))
    ));
}

#[test]
fn given_completion_response_when_extracting_then_joins_text_parts() {
    let json = r###"{
        "candidates": [
            {
                "content": {
                    "parts": [
                        {"text": "## Feedback\n"},
                        {"text": "✅ PONTOS POSITIVOS"}
                    ]
                }
            }
        ]
    }"###;

    let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
    let text = extract_text(parsed).unwrap();

    assert_eq!(text, "## Feedback\n✅ PONTOS POSITIVOS");
}

#[test]
fn given_completion_response_without_candidates_then_extraction_fails() {
    let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();

    assert!(matches!(
        extract_text(parsed),
        Err(GenerativeModelError::InvalidResponse(_))
    ));
}

#[test]
fn given_candidate_without_text_parts_then_extraction_fails() {
    let json = r#"{"candidates": [{"content": {"parts": [{}]}}]}"#;

    let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();

    assert!(extract_text(parsed).is_err());
}
