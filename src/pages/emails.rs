//! Emails page — compose and send outreach mail, and manage the sending
//! credential stored on the profile.

use leptos::prelude::*;

use crate::components::notice::{Notice, NoticeLine};
use crate::net::types::SendEmailRequest;
use crate::state::compose::ComposeState;
use crate::state::session::Session;

#[component]
pub fn EmailsPage() -> impl IntoView {
    view! {
        <div class="emails-page">
            <h1>"Emails"</h1>
            <ComposeForm/>
            <CredentialForm/>
        </div>
    }
}

/// Compose-and-send form. The draft lives in context so it survives
/// navigating away and back; it is only cleared on a successful send.
#[component]
fn ComposeForm() -> impl IntoView {
    let session = expect_context::<Session>();
    let compose = expect_context::<RwSignal<ComposeState>>();
    let notice = RwSignal::new(None::<Notice>);

    let on_send = move |_| {
        let draft = compose.get_untracked();
        if draft.sending {
            return;
        }
        if let Some(message) = draft.validation_error() {
            notice.set(Some(Notice::Error(message.to_owned())));
            return;
        }
        let Some(token) = session.get_untracked().token else {
            return;
        };

        compose.update(|c| c.sending = true);
        notice.set(None);
        leptos::task::spawn_local(async move {
            let req = SendEmailRequest {
                to: draft.to.trim().to_owned(),
                subject: draft.subject.trim().to_owned(),
                body: draft.body.clone(),
            };
            match crate::net::api::send_email(&token, &req).await {
                Ok(message) => {
                    compose.update(ComposeState::reset);
                    notice.set(Some(Notice::Success(message)));
                }
                Err(error) => {
                    compose.update(|c| c.sending = false);
                    notice.set(Some(Notice::Error(error)));
                }
            }
        });
    };

    view! {
        <div class="compose-form">
            <h2>"Compose"</h2>
            <label class="compose-form__label">
                "To"
                <input
                    class="compose-form__input"
                    type="email"
                    prop:value=move || compose.with(|c| c.to.clone())
                    on:input=move |ev| compose.update(|c| c.to = event_target_value(&ev))
                />
            </label>
            <label class="compose-form__label">
                "Subject"
                <input
                    class="compose-form__input"
                    type="text"
                    prop:value=move || compose.with(|c| c.subject.clone())
                    on:input=move |ev| compose.update(|c| c.subject = event_target_value(&ev))
                />
            </label>
            <label class="compose-form__label">
                "Message"
                <textarea
                    class="compose-form__body"
                    prop:value=move || compose.with(|c| c.body.clone())
                    on:input=move |ev| compose.update(|c| c.body = event_target_value(&ev))
                ></textarea>
            </label>

            <NoticeLine notice=notice/>

            <button
                class="btn btn--primary"
                disabled=move || compose.with(|c| c.sending)
                on:click=on_send
            >
                {move || if compose.with(|c| c.sending) { "Sending..." } else { "Send" }}
            </button>
        </div>
    }
}

/// Form for the mail-sending app password saved against the profile.
#[component]
fn CredentialForm() -> impl IntoView {
    let session = expect_context::<Session>();
    let password = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let value = password.get_untracked().trim().to_owned();
        if value.is_empty() {
            notice.set(Some(Notice::Error("an app password is required".to_owned())));
            return;
        }
        let Some(token) = session.get_untracked().token else {
            return;
        };

        saving.set(true);
        notice.set(None);
        leptos::task::spawn_local(async move {
            match crate::net::api::save_email_credential(&token, &value).await {
                Ok(message) => {
                    password.set(String::new());
                    notice.set(Some(Notice::Success(message)));
                }
                Err(error) => notice.set(Some(Notice::Error(error))),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="credential-form">
            <h2>"Sending credential"</h2>
            <p class="credential-form__hint">
                "Outgoing mail is sent with an app password stored on your profile."
            </p>
            <label class="credential-form__label">
                "App password"
                <input
                    class="credential-form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>

            <NoticeLine notice=notice/>

            <button class="btn" disabled=move || saving.get() on:click=on_save>
                "Save"
            </button>
        </div>
    }
}
