#[cfg(test)]
#[path = "schools_test.rs"]
mod schools_test;

use leptos::prelude::*;

use crate::net::types::School;
use crate::state::session::Session;

/// School list shared by the schools and map pages.
#[derive(Clone, Debug, Default)]
pub struct SchoolsState {
    pub items: Vec<School>,
    pub loading: bool,
    pub loaded: bool,
}

/// Case-insensitive substring filter over name, city, and postcode.
/// An empty query matches everything.
pub fn filter_schools(items: &[School], query: &str) -> Vec<School> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&needle)
                || s.city.to_lowercase().contains(&needle)
                || s.postcode.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Fetch the school list into the shared state unless it is already there.
/// At most one fetch runs at a time; pages call this from a mount effect.
/// On failure the list stays unloaded so the next visit retries.
pub fn ensure_loaded(session: Session, schools: RwSignal<SchoolsState>) {
    let state = schools.get_untracked();
    if state.loaded || state.loading {
        return;
    }
    let Some(token) = session.get_untracked().token else {
        return;
    };

    schools.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        let items = crate::net::api::fetch_schools(&token).await;
        schools.update(|s| {
            s.loading = false;
            if let Some(items) = items {
                s.items = items;
                s.loaded = true;
            } else {
                log::warn!("school list fetch failed");
            }
        });
    });
}
