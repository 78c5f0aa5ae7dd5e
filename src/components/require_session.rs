//! Route guard wrapping the protected section of the app.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::state::session::{GuardDecision, SessionState};

/// Parent-route component guarding its child routes behind a session.
///
/// While the initial session resolution is pending this renders a
/// placeholder instead of redirecting, so a signed-in user reloading the
/// page is not bounced through `/login`.
#[component]
pub fn RequireSession() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || match GuardDecision::for_state(&session.get()) {
        GuardDecision::Wait => {
            view! { <div class="guard-loading">"Loading..."</div> }.into_any()
        }
        GuardDecision::Render => view! { <Outlet/> }.into_any(),
        GuardDecision::RedirectToLogin => view! { <Redirect path="/login"/> }.into_any(),
    }
}
