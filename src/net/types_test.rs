use super::*;

// =============================================================
// ErrorBody decoding
// =============================================================

#[test]
fn error_body_prefers_message_over_error() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"m1","error":"m2"}"#).expect("decode");
    assert_eq!(body.into_message().as_deref(), Some("m1"));

    let body: ErrorBody = serde_json::from_str(r#"{"error":"m2"}"#).expect("decode");
    assert_eq!(body.into_message().as_deref(), Some("m2"));
}

#[test]
fn error_body_without_known_keys_yields_none() {
    let body: ErrorBody = serde_json::from_str("{}").expect("decode");
    assert!(body.into_message().is_none());
}

// =============================================================
// Success bodies
// =============================================================

#[test]
fn message_body_decodes() {
    let body: MessageBody = serde_json::from_str(r#"{"message":"Login successful"}"#).expect("decode");
    assert_eq!(body.message, "Login successful");
}

#[test]
fn user_tolerates_extra_keys() {
    // Whoami returns the full user record; only the name matters here.
    let user: User =
        serde_json::from_str(r#"{"id":7,"name":"Ada","email":"ada@example.com"}"#).expect("decode");
    assert_eq!(user.name, "Ada");
}

// =============================================================
// SessionResult
// =============================================================

#[test]
fn session_result_tags_are_distinct() {
    let ok: SessionResult<String> = SessionResult::Success("ok".to_owned());
    let rejected: SessionResult<String> = SessionResult::Failure("no".to_owned());
    let offline: SessionResult<String> = SessionResult::NetworkError("down".to_owned());

    assert!(ok.is_success());
    assert!(!rejected.is_success());
    assert!(!offline.is_success());
    assert_ne!(rejected, offline);
}
