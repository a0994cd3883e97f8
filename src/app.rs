//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_gate::AuthGate;
use crate::config::PortalConfig;
use crate::pages::{
    admin_users::AdminUsersPage, forbidden::ForbiddenPage, home::HomePage, not_found::NotFoundPage,
};
use crate::state::auth::SessionState;
use crate::state::store::AuthSessionStore;
use crate::util::auth::RouteAuthorizationGate;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store for this mount, mirrors it into a signal, and
/// wraps every route in [`AuthGate`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PortalConfig::from_build_env().unwrap_or_else(|err| {
        log::error!(target: "portal::config", "invalid build-time config, using defaults: {err}");
        PortalConfig::default()
    });

    let session = RwSignal::new(SessionState::default());
    let store = AuthSessionStore::browser(&config);
    store.subscribe(move |state| session.set(state.clone()));

    provide_context(session);
    provide_context(StoredValue::new_local(store));
    provide_context(RouteAuthorizationGate::from_config(&config));

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Portal"/>

        <Router>
            <AuthGate>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("users")) view=AdminUsersPage/>
                    <Route path=StaticSegment("403") view=ForbiddenPage/>
                    <Route path=StaticSegment("404") view=NotFoundPage/>
                </Routes>
            </AuthGate>
        </Router>
    }
}
