//! Home page — entry cards for each dashboard area.

use leptos::prelude::*;

use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();

    let greeting = move || {
        session
            .get()
            .user
            .map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.name))
    };

    view! {
        <div class="home-page">
            <h1>{greeting}</h1>
            <div class="home-page__cards">
                <a href="/schools" class="home-card">
                    <span class="home-card__title">"Schools"</span>
                    <span class="home-card__hint">"Browse and filter the school catalogue"</span>
                </a>
                <a href="/finder" class="home-card">
                    <span class="home-card__title">"Finder"</span>
                    <span class="home-card__hint">"Search the catalogue on the server"</span>
                </a>
                <a href="/emails" class="home-card">
                    <span class="home-card__title">"Emails"</span>
                    <span class="home-card__hint">"Send outreach mail to schools"</span>
                </a>
                <a href="/team" class="home-card">
                    <span class="home-card__title">"Team"</span>
                    <span class="home-card__hint">"See who is on the sales team"</span>
                </a>
                <a href="/map" class="home-card">
                    <span class="home-card__title">"Map"</span>
                    <span class="home-card__hint">"Pick stops and plan a visiting route"</span>
                </a>
            </div>
        </div>
    }
}
