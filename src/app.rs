//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::nav_bar::NavBar;
use crate::components::require_auth::RequireAuth;
use crate::pages::account::AccountPage;
use crate::pages::emails::EmailsPage;
use crate::pages::finder::FinderPage;
use crate::pages::home::HomePage;
use crate::pages::map::MapPage;
use crate::pages::schools::SchoolsPage;
use crate::pages::team::TeamPage;
use crate::state::compose::ComposeState;
use crate::state::planner::PlannerState;
use crate::state::schools::SchoolsState;
use crate::state::session::Session;

/// Root application component.
///
/// Creates the single session service for this run, provides the shared
/// state contexts, starts token resolution, and sets up client-side
/// routing. Every page except the account page sits behind [`RequireAuth`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    provide_context(session);
    provide_context(RwSignal::new(SchoolsState::default()));
    provide_context(RwSignal::new(PlannerState::default()));
    provide_context(RwSignal::new(ComposeState::default()));

    // Resolve any persisted token before the guards settle; pages render a
    // placeholder until this finishes.
    session.hydrate();

    view! {
        <Title text="Salescope"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <HomePage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("schools")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <SchoolsPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("finder")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <FinderPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("emails")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <EmailsPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("team")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <TeamPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("map")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <MapPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route path=StaticSegment("account") view=AccountPage/>
                </Routes>
            </main>
        </Router>
    }
}
