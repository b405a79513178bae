use super::*;

fn state(phase: SessionPhase) -> SessionState {
    SessionState {
        token: None,
        user: None,
        phase,
    }
}

// =============================================================
// Guard outcomes
// =============================================================

#[test]
fn uninitialized_session_waits() {
    assert_eq!(guard_outcome(&state(SessionPhase::Uninitialized), "/schools"), GuardOutcome::Wait);
}

#[test]
fn resolving_session_waits() {
    assert_eq!(guard_outcome(&state(SessionPhase::Resolving), "/schools"), GuardOutcome::Wait);
}

#[test]
fn authenticated_session_renders() {
    assert_eq!(guard_outcome(&state(SessionPhase::Authenticated), "/schools"), GuardOutcome::Render);
}

#[test]
fn anonymous_session_redirects_preserving_location() {
    assert_eq!(
        guard_outcome(&state(SessionPhase::Anonymous), "/schools"),
        GuardOutcome::Redirect("/account?redirect=/schools".to_owned())
    );
}

#[test]
fn anonymous_session_at_root_redirects_plainly() {
    assert_eq!(
        guard_outcome(&state(SessionPhase::Anonymous), "/"),
        GuardOutcome::Redirect("/account".to_owned())
    );
    assert_eq!(
        guard_outcome(&state(SessionPhase::Anonymous), ""),
        GuardOutcome::Redirect("/account".to_owned())
    );
}
