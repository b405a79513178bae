//! # salescope
//!
//! Leptos + WASM front-end for the Salescope sales-management dashboard.
//! Renders the home, schools, finder, emails, team, account, and map pages
//! and talks to the remote backend over its JSON REST API.
//!
//! The session lifecycle lives in [`state::session`]: token persistence,
//! startup profile resolution, and sign-out on token invalidation. Route
//! protection is handled by [`components::require_auth`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
