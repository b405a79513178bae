//! Inline success/error line shown under forms.

use leptos::prelude::*;

/// Outcome of the last form submission, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Renders the current notice, or nothing when there is none.
#[component]
pub fn NoticeLine(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| match n {
            Notice::Success(text) => view! { <p class="notice notice--success">{text}</p> }.into_any(),
            Notice::Error(text) => view! { <p class="notice notice--error">{text}</p> }.into_any(),
        })
    }
}
