use super::*;

fn draft(to: &str, subject: &str) -> ComposeState {
    ComposeState {
        to: to.to_owned(),
        subject: subject.to_owned(),
        body: "Hello".to_owned(),
        sending: false,
    }
}

// =============================================================
// Draft validation
// =============================================================

#[test]
fn empty_recipient_is_rejected() {
    assert_eq!(
        draft("", "Visit next week").validation_error(),
        Some("a recipient address is required")
    );
    assert_eq!(
        draft("   ", "Visit next week").validation_error(),
        Some("a recipient address is required")
    );
}

#[test]
fn recipient_without_at_is_rejected() {
    assert_eq!(
        draft("head.office", "Visit next week").validation_error(),
        Some("the recipient address looks invalid")
    );
}

#[test]
fn empty_subject_is_rejected() {
    assert_eq!(
        draft("head@northgate.sch.uk", "  ").validation_error(),
        Some("a subject is required")
    );
}

#[test]
fn complete_draft_passes() {
    assert_eq!(draft("head@northgate.sch.uk", "Visit next week").validation_error(), None);
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_clears_draft() {
    let mut state = draft("head@northgate.sch.uk", "Visit next week");
    state.sending = true;

    state.reset();

    assert!(state.to.is_empty());
    assert!(state.subject.is_empty());
    assert!(state.body.is_empty());
    assert!(!state.sending);
}
