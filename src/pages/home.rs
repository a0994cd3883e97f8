//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows who is signed in and offers logout. The admin link only appears for
//! principals the role table lets through; the gate enforces it regardless.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::UserRecord;
use crate::state::auth::SessionState;
use crate::state::store::AuthSessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<StoredValue<AuthSessionStore, LocalStorage>>();

    let self_identity = move || {
        session.with(|s| {
            s.current_user()
                .map(|user| (user.name.clone(), user.role.to_string()))
                .unwrap_or_else(|| ("me".to_owned(), "user".to_owned()))
        })
    };
    let is_admin = move || session.with(|s| s.current_user().is_some_and(UserRecord::is_admin));

    let on_logout = move |_| store.with_value(AuthSessionStore::logout);

    view! {
        <div class="home-page">
            <header class="home-page__header toolbar">
                <span class="toolbar__title">"Portal"</span>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">
                    {move || self_identity().0}
                    " ("
                    <span class="toolbar__self-role">{move || self_identity().1}</span>
                    ")"
                </span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>
            <Show when=is_admin>
                <nav class="home-page__admin">
                    <A href="/admin/users">"Manage users"</A>
                </nav>
            </Show>
        </div>
    }
}
