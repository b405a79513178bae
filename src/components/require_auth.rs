//! Route protection for pages that need a signed-in user.
//!
//! This is a UX guard only: it redirects anonymous visitors, but the API
//! still validates the bearer token on every call.

#[cfg(test)]
#[path = "require_auth_test.rs"]
mod require_auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{Session, SessionPhase, SessionState};

/// What the guard decided for a protected location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving: show a neutral placeholder, never a flash
    /// of redirect before resolution settles.
    Wait,
    /// Authenticated: render the protected content.
    Render,
    /// Anonymous: go to the login surface, keeping the requested location
    /// for the post-login return.
    Redirect(String),
}

/// Decide what to do with `requested` under the current session state.
pub fn guard_outcome(state: &SessionState, requested: &str) -> GuardOutcome {
    match state.phase {
        SessionPhase::Uninitialized | SessionPhase::Resolving => GuardOutcome::Wait,
        SessionPhase::Authenticated => GuardOutcome::Render,
        SessionPhase::Anonymous => GuardOutcome::Redirect(login_location(requested)),
    }
}

/// Login surface URL carrying the originally requested path.
pub fn login_location(requested: &str) -> String {
    if requested.is_empty() || requested == "/" {
        "/account".to_owned()
    } else {
        format!("/account?redirect={requested}")
    }
}

/// Renders children only for an authenticated session.
///
/// Re-evaluates on every session transition, so a logout while a protected
/// page is open redirects immediately.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        let requested = location.pathname.get();
        if let GuardOutcome::Redirect(target) = guard_outcome(&state, &requested) {
            navigate(&target, NavigateOptions::default());
        }
    });

    move || match session.get().phase {
        SessionPhase::Authenticated => children(),
        _ => view! { <div class="guard-placeholder"></div> }.into_any(),
    }
}
