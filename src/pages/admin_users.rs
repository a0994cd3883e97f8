//! User administration landing page.

use leptos::prelude::*;

use crate::state::auth::SessionState;

/// Admin-only route. Reaching this component means the gate already saw an
/// authenticated admin.
#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let admin_email = move || session.with(|s| s.current_user().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <div class="admin-page">
            <h1>"Users"</h1>
            <p class="admin-page__self">"Signed in as " {admin_email}</p>
        </div>
    }
}
