//! Route gate wrapping the router outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside `<Router>`. Starts the session load when it mounts and
//! re-evaluates [`RouteAuthorizationGate`] on every path or session change,
//! re-rendering only when the decision itself changes.
//! Effects don't run during server rendering, so the server never probes and
//! renders the placeholder for anything that isn't public.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::session_placeholder::SessionPlaceholder;
use crate::state::LOG_TARGET;
use crate::state::auth::SessionState;
use crate::state::store::AuthSessionStore;
use crate::util::auth::{GateDecision, RouteAuthorizationGate};

/// Render `children` only when the current route is accessible.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<StoredValue<AuthSessionStore, LocalStorage>>();
    let gate = expect_context::<RouteAuthorizationGate>();
    let location = use_location();

    // Once per mount; nothing reactive is read here.
    Effect::new(move || {
        let store = store.get_value();
        leptos::task::spawn_local(async move {
            let outcome = store.load_session().await;
            log::debug!(target: LOG_TARGET, "initial session load finished: {outcome:?}");
        });
    });

    // Memoized so the outlet is rebuilt only when the decision changes;
    // `<Routes>` follows the path by itself.
    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        session.with(|state| gate.evaluate(&path, state))
    });

    move || match decision.get() {
        GateDecision::RenderChildren => children().into_any(),
        GateDecision::RenderPlaceholder => view! { <SessionPlaceholder/> }.into_any(),
        GateDecision::Redirect(target) => view! { <Redirect path=target/> }.into_any(),
    }
}
