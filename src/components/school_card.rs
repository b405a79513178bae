//! Card for a single school in list views.

use leptos::prelude::*;

use crate::net::types::School;

/// One school with its contact details.
#[component]
pub fn SchoolCard(school: School) -> impl IntoView {
    view! {
        <div class="school-card">
            <span class="school-card__name">{school.name}</span>
            <span class="school-card__place">
                {format!("{}, {} {}", school.address, school.city, school.postcode)}
            </span>
            {school
                .phone
                .map(|phone| view! { <span class="school-card__contact">{phone}</span> })}
            {school
                .email
                .map(|email| view! { <span class="school-card__contact">{email}</span> })}
        </div>
    }
}
