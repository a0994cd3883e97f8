//! Forbidden page shown when the signed-in user lacks the required role.

use leptos::prelude::*;
use leptos_router::components::A;

/// Public route; the gate redirects here on a role mismatch.
#[component]
pub fn ForbiddenPage() -> impl IntoView {
    view! {
        <div class="status-page status-page--forbidden">
            <h1>"403"</h1>
            <p>"You don't have access to this page."</p>
            <A href="/">"Back to the portal"</A>
        </div>
    }
}
