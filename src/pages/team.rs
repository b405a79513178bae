//! Team page — the sales team roster.

use leptos::prelude::*;

use crate::state::session::Session;

#[component]
pub fn TeamPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let members = LocalResource::new(move || {
        let token = session.get().token;
        async move {
            match token {
                Some(token) => crate::net::api::fetch_team(&token).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    view! {
        <div class="team-page">
            <h1>"Team"</h1>
            <Suspense fallback=move || view! { <p>"Loading team..."</p> }>
                {move || {
                    members
                        .get()
                        .map(|list| {
                            view! {
                                <div class="team-page__cards">
                                    {list
                                        .into_iter()
                                        .map(|member| {
                                            view! {
                                                <div class="team-card">
                                                    <span class="team-card__name">{member.name}</span>
                                                    <span class="team-card__email">{member.email}</span>
                                                    {member
                                                        .phone
                                                        .map(|phone| {
                                                            view! { <span class="team-card__phone">{phone}</span> }
                                                        })}
                                                    {member
                                                        .admin
                                                        .then(|| {
                                                            view! { <span class="team-card__badge">"Admin"</span> }
                                                        })}
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
