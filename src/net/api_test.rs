use super::*;

// =============================================================
// Error body extraction
// =============================================================

#[test]
fn body_error_message_prefers_error_then_message() {
    let body = serde_json::json!({"error": "no such account", "message": "ok"});
    assert_eq!(body_error_message(&body), Some("no such account"));

    let body = serde_json::json!({"message": "check your inbox"});
    assert_eq!(body_error_message(&body), Some("check your inbox"));
}

#[test]
fn body_error_message_absent_for_clean_bodies() {
    assert_eq!(body_error_message(&serde_json::json!({})), None);
    assert_eq!(body_error_message(&serde_json::json!({"name": "Ada"})), None);
}

#[test]
fn body_error_message_skips_non_string_error_values() {
    let body = serde_json::json!({"error": 500, "message": "upstream down"});
    assert_eq!(body_error_message(&body), Some("upstream down"));
}
