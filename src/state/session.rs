#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage;

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup resolution has not begun.
    #[default]
    Uninitialized,
    /// A profile fetch for the current token is in flight.
    Resolving,
    /// The backend confirmed the token; `user` is set.
    Authenticated,
    /// No usable session.
    Anonymous,
}

/// Result of a finished profile fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolveOutcome {
    /// 200 with a profile body.
    Profile(User),
    /// The backend explicitly rejected the token.
    Unauthorized,
    /// Transport failure, timeout, or an error-shaped/unreadable body.
    Failed,
}

/// Authentication state: the bearer token and the resolved user.
///
/// Invariant: `user` is `Some` only while `phase` is `Authenticated` and a
/// token is present. All transitions here are synchronous and free of I/O;
/// persistence and network effects live on the [`Session`] handle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub phase: SessionPhase,
}

impl SessionState {
    /// Install a token and profile obtained from a successful authentication
    /// call. The caller is trusted; no intermediate resolving step occurs.
    pub fn login(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.phase = SessionPhase::Authenticated;
    }

    /// Drop the token and user. Safe in any state, any number of times.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.phase = SessionPhase::Anonymous;
    }

    /// Start resolving `token` into a profile, clearing any stale user.
    pub fn begin_resolving(&mut self, token: String) {
        self.token = Some(token);
        self.user = None;
        self.phase = SessionPhase::Resolving;
    }

    /// Startup with nothing persisted: settle as anonymous without a fetch.
    pub fn resolve_without_token(&mut self) {
        self.token = None;
        self.user = None;
        self.phase = SessionPhase::Anonymous;
    }

    /// Apply the outcome of a profile fetch issued for `requested_token`.
    ///
    /// Returns `false` and changes nothing when the fetch no longer matches
    /// the current state: the token changed, or a login/logout moved the
    /// phase past `Resolving` in the meantime. A late response for a
    /// superseded token must never overwrite a newer session.
    pub fn apply_outcome(&mut self, requested_token: &str, outcome: ResolveOutcome) -> bool {
        if self.phase != SessionPhase::Resolving || self.token.as_deref() != Some(requested_token) {
            return false;
        }
        match outcome {
            ResolveOutcome::Profile(user) => {
                self.user = Some(user);
                self.phase = SessionPhase::Authenticated;
            }
            ResolveOutcome::Unauthorized => self.logout(),
            ResolveOutcome::Failed => {
                // Keep the token, in memory and in storage, so a later
                // reload retries resolution; the session reads as anonymous
                // until then.
                self.user = None;
                self.phase = SessionPhase::Anonymous;
            }
        }
        true
    }
}

/// Process-wide session service: constructed once in `App` and shared via
/// context. The inner signal is the subscription surface; guards, the nav
/// bar, and pages re-evaluate on every transition.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Reactive read; tracks inside effects and views.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Non-reactive read for event handlers and async tasks.
    pub fn get_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Store a token and profile from a successful login call and persist
    /// the token. Reads reflect the new session immediately.
    pub fn login(&self, token: &str, user: User) {
        storage::set_token(token);
        self.state.update(|s| s.login(token.to_owned(), user));
    }

    /// Clear the session and the persisted token. Synchronous; no network
    /// round-trip is involved.
    pub fn logout(&self) {
        storage::remove_token();
        self.state.update(SessionState::logout);
    }

    /// Turn any persisted token into a confirmed profile or an anonymous
    /// determination. Runs once at application start.
    pub fn hydrate(&self) {
        let Some(token) = storage::token() else {
            self.state.update(SessionState::resolve_without_token);
            return;
        };
        self.state.update(|s| s.begin_resolving(token.clone()));

        let state = self.state;
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_profile(&token).await;
            apply_resolved(state, &token, outcome);
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a finished fetch along with its storage side effect. Storage is
/// only touched when the outcome actually applied, so a stale 401 for a
/// superseded token cannot delete a newer session's persisted token.
fn apply_resolved(state: RwSignal<SessionState>, requested_token: &str, outcome: ResolveOutcome) {
    let unauthorized = matches!(outcome, ResolveOutcome::Unauthorized);
    let mut applied = false;
    state.update(|s| applied = s.apply_outcome(requested_token, outcome));
    if applied && unauthorized {
        storage::remove_token();
        log::warn!("stored token rejected by backend; signed out");
    }
}
