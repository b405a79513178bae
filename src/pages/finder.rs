//! Finder page — backend search over the school catalogue.
//!
//! Unlike the schools page, which filters an already-fetched list, this one
//! asks the backend on every query change so it can search fields the list
//! payload does not carry.

use leptos::prelude::*;

use crate::components::school_card::SchoolCard;
use crate::state::session::Session;

/// Minimum query length before the backend is asked.
const MIN_QUERY_LEN: usize = 2;

#[component]
pub fn FinderPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let query = RwSignal::new(String::new());

    // Re-runs whenever the query (or the session token) changes.
    let results = LocalResource::new(move || {
        let token = session.get().token;
        let raw = query.get();
        async move {
            let q = raw.trim().to_owned();
            if q.len() < MIN_QUERY_LEN {
                return Vec::new();
            }
            match token {
                Some(token) => crate::net::api::search_schools(&token, &q).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let active = move || query.get().trim().len() >= MIN_QUERY_LEN;

    view! {
        <div class="finder-page">
            <header class="finder-page__header">
                <h1>"Finder"</h1>
                <input
                    class="finder-page__query"
                    type="search"
                    placeholder="Search schools"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </header>

            <Show
                when=active
                fallback=|| view! { <p class="finder-page__hint">"Type at least two characters to search."</p> }
            >
                <Suspense fallback=move || view! { <p>"Searching..."</p> }>
                    {move || {
                        results
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! { <p class="finder-page__hint">"No schools matched."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="finder-page__cards">
                                            {list
                                                .into_iter()
                                                .map(|school| view! { <SchoolCard school=school/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </Show>
        </div>
    }
}
