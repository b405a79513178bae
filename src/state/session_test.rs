use super::*;

fn user(name: &str) -> User {
    User {
        name: name.to_owned(),
        email: format!("{name}@example.com"),
        phone: None,
        admin: false,
    }
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn default_state_is_uninitialized() {
    let state = SessionState::default();
    assert_eq!(state.phase, SessionPhase::Uninitialized);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn login_is_synchronous_and_authenticated() {
    let mut state = SessionState::default();
    state.login("tok-1".to_owned(), user("ada"));

    assert_eq!(state.phase, SessionPhase::Authenticated);
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("ada"));
}

#[test]
fn logout_clears_token_and_user() {
    let mut state = SessionState::default();
    state.login("tok-1".to_owned(), user("ada"));
    state.logout();

    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn logout_is_idempotent() {
    let mut once = SessionState::default();
    once.login("tok-1".to_owned(), user("ada"));
    once.logout();

    let mut twice = once.clone();
    twice.logout();

    assert_eq!(once, twice);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn begin_resolving_clears_stale_user() {
    let mut state = SessionState::default();
    state.login("tok-1".to_owned(), user("ada"));
    state.begin_resolving("tok-2".to_owned());

    assert_eq!(state.phase, SessionPhase::Resolving);
    assert_eq!(state.token.as_deref(), Some("tok-2"));
    assert!(state.user.is_none());
}

#[test]
fn resolve_without_token_settles_anonymous() {
    let mut state = SessionState::default();
    state.resolve_without_token();

    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn profile_outcome_authenticates() {
    let mut state = SessionState::default();
    state.begin_resolving("tok-1".to_owned());

    let applied = state.apply_outcome("tok-1", ResolveOutcome::Profile(user("ada")));

    assert!(applied);
    assert_eq!(state.phase, SessionPhase::Authenticated);
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("ada"));
}

#[test]
fn unauthorized_outcome_signs_out() {
    let mut state = SessionState::default();
    state.begin_resolving("tok-1".to_owned());

    let applied = state.apply_outcome("tok-1", ResolveOutcome::Unauthorized);

    assert!(applied);
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn failed_outcome_keeps_token_but_no_user() {
    let mut state = SessionState::default();
    state.begin_resolving("tok-1".to_owned());

    let applied = state.apply_outcome("tok-1", ResolveOutcome::Failed);

    assert!(applied);
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert!(state.user.is_none());
}

// =============================================================
// Race safety
// =============================================================

#[test]
fn stale_outcome_for_old_token_is_discarded() {
    let mut state = SessionState::default();
    state.begin_resolving("tok-a".to_owned());
    state.login("tok-b".to_owned(), user("bea"));

    let applied = state.apply_outcome("tok-a", ResolveOutcome::Profile(user("ada")));

    assert!(!applied);
    assert_eq!(state.phase, SessionPhase::Authenticated);
    assert_eq!(state.token.as_deref(), Some("tok-b"));
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("bea"));
}

#[test]
fn stale_unauthorized_cannot_sign_out_newer_session() {
    let mut state = SessionState::default();
    state.begin_resolving("tok-a".to_owned());
    state.login("tok-b".to_owned(), user("bea"));

    let applied = state.apply_outcome("tok-a", ResolveOutcome::Unauthorized);

    assert!(!applied);
    assert_eq!(state.phase, SessionPhase::Authenticated);
    assert_eq!(state.token.as_deref(), Some("tok-b"));
}

#[test]
fn outcome_after_logout_is_discarded() {
    let mut state = SessionState::default();
    state.begin_resolving("tok-a".to_owned());
    state.logout();

    let applied = state.apply_outcome("tok-a", ResolveOutcome::Profile(user("ada")));

    assert!(!applied);
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert!(state.user.is_none());
}

#[test]
fn outcome_applies_only_while_resolving() {
    let mut state = SessionState::default();
    state.login("tok-b".to_owned(), user("bea"));

    // Same token, but the phase already moved past Resolving.
    let applied = state.apply_outcome("tok-b", ResolveOutcome::Failed);

    assert!(!applied);
    assert_eq!(state.phase, SessionPhase::Authenticated);
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("bea"));
}
