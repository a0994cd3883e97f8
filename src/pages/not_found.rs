//! Not-found page, also used as the router fallback.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page status-page--not-found">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <A href="/">"Back to the portal"</A>
        </div>
    }
}
