use callcoach::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_transcript_when_sanitizing_then_returns_unchanged() {
    let transcript = "Cliente pediu o contrato por e-mail.";
    assert_eq!(sanitize_prompt(transcript), transcript);
}

#[test]
fn given_long_transcript_when_sanitizing_then_truncates_with_length() {
    let transcript = "a".repeat(150);
    let result = sanitize_prompt(&transcript);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_multibyte_transcript_when_sanitizing_then_cuts_on_char_boundary() {
    let transcript = "ã".repeat(120);
    let result = sanitize_prompt(&transcript);
    assert!(result.contains("chars total"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let transcript = "Authorization: Bearer sk-abc123xyz";
    let result = sanitize_prompt(transcript);
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_api_key_when_sanitizing_then_redacts_key() {
    let transcript = "Send request with api_key=secret123";
    let result = sanitize_prompt(transcript);
    assert!(result.contains("api_key=[REDACTED]"));
    assert!(!result.contains("secret123"));
}
