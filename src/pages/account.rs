//! Account page — the login surface, registration, and the signed-in
//! profile. The only unprotected route: the guard sends anonymous visitors
//! here with the requested path in the `redirect` query parameter, and a
//! successful sign-in returns them to it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::notice::{Notice, NoticeLine};
use crate::net::types::RegisterRequest;
use crate::state::session::{Session, SessionPhase};

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <div class="account-page">
            {move || match session.get().phase {
                SessionPhase::Authenticated => view! { <ProfileCard/> }.into_any(),
                SessionPhase::Uninitialized | SessionPhase::Resolving => {
                    view! { <div class="guard-placeholder"></div> }.into_any()
                }
                SessionPhase::Anonymous => view! { <AuthForms/> }.into_any(),
            }}
        </div>
    }
}

/// Which form the visitor is looking at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    Register,
}

/// Sign-in and registration forms with a tab toggle.
///
/// Sign-in installs the returned token and profile into the session and
/// navigates to the originally requested location. Registration only shows
/// the backend acknowledgment and flips back to the sign-in tab; it never
/// touches session state.
#[component]
fn AuthForms() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let query = use_query_map();

    let mode = RwSignal::new(AuthMode::SignIn);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let submit = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            notice.set(Some(Notice::Error("email and password are required".to_owned())));
            return;
        }

        pending.set(true);
        notice.set(None);
        match mode.get_untracked() {
            AuthMode::SignIn => {
                let navigate = navigate.clone();
                let redirect = query
                    .get_untracked()
                    .get("redirect")
                    .unwrap_or_else(|| "/".to_owned());
                leptos::task::spawn_local(async move {
                    match crate::net::api::login(&email_value, &password_value).await {
                        Ok(auth) => {
                            session.login(&auth.access_token, auth.user);
                            navigate(&redirect, NavigateOptions::default());
                        }
                        Err(error) => {
                            pending.set(false);
                            notice.set(Some(Notice::Error(error)));
                        }
                    }
                });
            }
            AuthMode::Register => {
                let phone_value = phone.get_untracked().trim().to_owned();
                let req = RegisterRequest {
                    name: name.get_untracked().trim().to_owned(),
                    email: email_value,
                    phone: (!phone_value.is_empty()).then_some(phone_value),
                    password: password_value,
                };
                leptos::task::spawn_local(async move {
                    match crate::net::api::register(&req).await {
                        Ok(message) => {
                            mode.set(AuthMode::SignIn);
                            password.set(String::new());
                            notice.set(Some(Notice::Success(message)));
                        }
                        Err(error) => notice.set(Some(Notice::Error(error))),
                    }
                    pending.set(false);
                });
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit.run(());
        }
    };

    let tab_class = move |tab: AuthMode| {
        if mode.get() == tab {
            "btn auth-card__tab auth-card__tab--active"
        } else {
            "btn auth-card__tab"
        }
    };

    view! {
        <div class="auth-card">
            <div class="auth-card__tabs">
                <button
                    class=move || tab_class(AuthMode::SignIn)
                    on:click=move |_| mode.set(AuthMode::SignIn)
                >
                    "Sign in"
                </button>
                <button
                    class=move || tab_class(AuthMode::Register)
                    on:click=move |_| mode.set(AuthMode::Register)
                >
                    "Register"
                </button>
            </div>

            <Show when=move || mode.get() == AuthMode::Register>
                <label class="auth-card__label">
                    "Name"
                    <input
                        class="auth-card__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-card__label">
                    "Phone (optional)"
                    <input
                        class="auth-card__input"
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
            </Show>

            <label class="auth-card__label">
                "Email"
                <input
                    class="auth-card__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </label>
            <label class="auth-card__label">
                "Password"
                <input
                    class="auth-card__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </label>

            <NoticeLine notice=notice/>

            <button
                class="btn btn--primary auth-card__submit"
                disabled=move || pending.get()
                on:click=move |_| submit.run(())
            >
                {move || match mode.get() {
                    AuthMode::SignIn => "Sign in",
                    AuthMode::Register => "Create account",
                }}
            </button>
        </div>
    }
}

/// Profile details and sign-out for the signed-in user.
#[component]
fn ProfileCard() -> impl IntoView {
    let session = expect_context::<Session>();

    // Logout is synchronous; this page just re-renders into the forms.
    let on_logout = move |_| session.logout();

    view! {
        <div class="profile-card">
            <h2>"Account"</h2>
            {move || {
                session.get().user.map(|u| {
                    view! {
                        <dl class="profile-card__details">
                            <dt>"Name"</dt>
                            <dd>{u.name}</dd>
                            <dt>"Email"</dt>
                            <dd>{u.email}</dd>
                            {u.phone
                                .map(|phone| {
                                    view! {
                                        <dt>"Phone"</dt>
                                        <dd>{phone}</dd>
                                    }
                                })}
                            <dt>"Role"</dt>
                            <dd>{if u.admin { "Administrator" } else { "Sales" }}</dd>
                        </dl>
                    }
                })
            }}
            <button class="btn" on:click=on_logout>
                "Sign out"
            </button>
        </div>
    }
}
