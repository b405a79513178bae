//! Map page — pick schools as stops and request a visiting order.
//!
//! The backend owns the actual route optimization; this page only forwards
//! the selected points and renders the order it gets back. There is no tile
//! layer yet, so stops appear on a plain pin board.

use leptos::prelude::*;

use crate::net::types::RouteStop;
use crate::state::planner::PlannerState;
use crate::state::schools::{self, SchoolsState};
use crate::state::session::Session;

#[component]
pub fn MapPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let schools = expect_context::<RwSignal<SchoolsState>>();
    let planner = expect_context::<RwSignal<PlannerState>>();

    Effect::new(move || {
        schools::ensure_loaded(session, schools);
    });

    let on_plan = move |_| {
        let state = planner.get_untracked();
        if state.planning {
            return;
        }
        if state.stops.len() < 2 {
            planner.update(|p| p.error = Some("pick at least two stops".to_owned()));
            return;
        }
        let Some(token) = session.get_untracked().token else {
            return;
        };

        let stops: Vec<RouteStop> = state
            .stops
            .iter()
            .map(|s| RouteStop {
                id: s.id,
                lat: s.lat,
                lng: s.lng,
            })
            .collect();
        planner.update(|p| {
            p.planning = true;
            p.error = None;
        });
        leptos::task::spawn_local(async move {
            match crate::net::api::plan_route(&token, &stops).await {
                Ok(plan) => planner.update(|p| {
                    p.planning = false;
                    p.apply_plan(&plan.order);
                }),
                Err(error) => planner.update(|p| {
                    p.planning = false;
                    p.error = Some(error);
                }),
            }
        });
    };

    let on_clear = move |_| planner.update(PlannerState::clear);

    view! {
        <div class="map-page">
            <section class="map-page__picker">
                <h2>"Stops"</h2>
                <Show
                    when=move || !schools.get().loading
                    fallback=|| view! { <p>"Loading schools..."</p> }
                >
                    {move || {
                        schools
                            .get()
                            .items
                            .into_iter()
                            .map(|school| {
                                let id = school.id;
                                let label = format!("{} ({})", school.name, school.city);
                                view! {
                                    <label class="map-page__pick">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || planner.with(|p| p.is_selected(id))
                                            on:change=move |_| planner.update(|p| p.toggle(&school))
                                        />
                                        {label}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </section>

            <section class="map-page__board">
                <h2>"Map"</h2>
                <div class="map-page__canvas">
                    {move || {
                        planner
                            .get()
                            .stops
                            .into_iter()
                            .enumerate()
                            .map(|(i, stop)| {
                                view! {
                                    <span
                                        class="map-page__pin"
                                        title=format!("{:.4}, {:.4}", stop.lat, stop.lng)
                                    >
                                        <span class="map-page__pin-index">{i + 1}</span>
                                        {stop.name}
                                    </span>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="map-page__route">
                <h2>"Route"</h2>
                <ol class="map-page__order">
                    {move || {
                        planner
                            .get()
                            .stops
                            .into_iter()
                            .map(|stop| view! { <li>{stop.name}</li> })
                            .collect::<Vec<_>>()
                    }}
                </ol>
                {move || {
                    planner
                        .get()
                        .error
                        .map(|error| view! { <p class="notice notice--error">{error}</p> })
                }}
                <div class="map-page__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || planner.with(|p| p.planning)
                        on:click=on_plan
                    >
                        {move || if planner.with(|p| p.planning) { "Planning..." } else { "Plan route" }}
                    </button>
                    <button class="btn" on:click=on_clear>
                        "Clear"
                    </button>
                </div>
            </section>
        </div>
    }
}
