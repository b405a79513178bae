//! Schools page — the full list with a client-side filter box.

use leptos::prelude::*;

use crate::components::school_card::SchoolCard;
use crate::state::schools::{self, SchoolsState, filter_schools};
use crate::state::session::Session;

/// Full school list. The list is fetched once into shared state (the map
/// page reuses it); the filter box narrows it in memory.
#[component]
pub fn SchoolsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let schools = expect_context::<RwSignal<SchoolsState>>();
    let query = RwSignal::new(String::new());

    Effect::new(move || {
        schools::ensure_loaded(session, schools);
    });

    let filtered = move || {
        let state = schools.get();
        filter_schools(&state.items, &query.get())
    };
    let loading = move || schools.get().loading;
    let summary = move || {
        let shown = filtered().len();
        let total = schools.get().items.len();
        if shown == total {
            format!("{total} schools")
        } else {
            format!("{shown} of {total} schools")
        }
    };

    view! {
        <div class="schools-page">
            <header class="schools-page__header">
                <h1>"Schools"</h1>
                <input
                    class="schools-page__filter"
                    type="search"
                    placeholder="Filter by name, city, or postcode"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <span class="schools-page__summary">{summary}</span>
            </header>

            <Show
                when=move || !loading()
                fallback=|| view! { <p>"Loading schools..."</p> }
            >
                <div class="schools-page__cards">
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|school| view! { <SchoolCard school=school/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
