//! Top navigation bar with section links, the signed-in user, and logout.

use leptos::prelude::*;

use crate::state::session::{Session, SessionPhase};

/// Application-wide navigation bar.
///
/// Section links only appear for a signed-in user; anonymous visitors get a
/// single sign-in link. Logout only clears the session; the route guard on
/// whatever protected page is open reacts to the transition and performs
/// the redirect.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<Session>();

    let signed_in = move || session.get().phase == SessionPhase::Authenticated;
    let user_name = move || session.get().user.map_or_else(String::new, |u| u.name);

    let on_logout = move |_| session.logout();

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">
                "Salescope"
            </a>
            <Show when=signed_in>
                <a href="/schools" class="nav-bar__link">"Schools"</a>
                <a href="/finder" class="nav-bar__link">"Finder"</a>
                <a href="/emails" class="nav-bar__link">"Emails"</a>
                <a href="/team" class="nav-bar__link">"Team"</a>
                <a href="/map" class="nav-bar__link">"Map"</a>
            </Show>
            <span class="nav-bar__spacer"></span>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <a href="/account" class="nav-bar__link">
                            "Sign in"
                        </a>
                    }
                }
            >
                <span class="nav-bar__user">{user_name}</span>
                <button class="btn nav-bar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
