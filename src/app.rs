//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::require_session::RequireSession;
use crate::net::identity::{IdentityProvider, RestIdentityProvider};
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::session::{SessionObserver, SessionState};

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
/// Provides the session context, wires the identity-provider observer,
/// and sets up client-side routing. Unknown paths land on the dashboard,
/// whose guard bounces signed-out visitors to login.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Browser-only values live in local storage slots so the context
    // itself stays Send-compatible under SSR.
    let provider: Rc<dyn IdentityProvider> = Rc::new(RestIdentityProvider::new());
    let observer = SessionObserver::new(Rc::clone(&provider), move |change| {
        session.update(|state| state.note_change(change));
    });
    provide_context(StoredValue::new_local(provider));
    provide_context(StoredValue::new_local(observer));

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-console.css"/>
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/dashboard"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <ParentRoute path=StaticSegment("") view=RequireSession>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
