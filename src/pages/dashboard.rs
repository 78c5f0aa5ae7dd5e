//! Dashboard page showing the admin's credentials and assigned orders.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::order_table::OrderTable;
use crate::state::dashboard::DashboardState;
use crate::state::session::{SessionObserver, SessionState};

/// Dashboard page. Runs the two-step data fetch whenever the session
/// identity changes and clears everything when the session ends.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let observer = expect_context::<StoredValue<SessionObserver, LocalStorage>>();
    let navigate = use_navigate();

    let dashboard = RwSignal::new(DashboardState::default());

    Effect::new(move || match session.get().uid() {
        Some(uid) => {
            let generation = dashboard.try_update(DashboardState::begin).unwrap_or_default();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::admin_data::fetch_for_session(&uid).await;
                // The page may be gone by the time the response lands.
                dashboard.try_update(|d| d.apply(generation, outcome));
            });
        }
        None => {
            dashboard.update(DashboardState::clear);
        }
    });

    let on_logout = move |_| {
        let navigate = navigate.clone();
        let sign_out = observer.with_value(SessionObserver::sign_out);
        leptos::task::spawn_local(async move {
            match sign_out.await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(err) => leptos::logging::warn!("logout failed: {err}"),
            }
        });
    };

    let uid_text = move || session.get().uid().unwrap_or_default();
    let admin_id_text = move || {
        let state = dashboard.get();
        if state.loading || (state.admin_id.is_empty() && state.error.is_none()) {
            "Fetching...".to_owned()
        } else {
            state.admin_id
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Admin Dashboard"</h1>
                <button class="btn btn--danger" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <div class="dashboard-page__content">
                <div class="credentials-card">
                    <h2 class="credentials-card__title">"Your Credentials"</h2>
                    <p class="credentials-card__line">
                        "User ID (UID): "
                        <span class="credentials-card__uid">{uid_text}</span>
                    </p>
                    <p class="credentials-card__line">
                        "Fetched Admin ID: "
                        <span class="credentials-card__admin-id">{admin_id_text}</span>
                    </p>
                    {move || {
                        dashboard.get().error.map(|message| {
                            view! {
                                <p class="credentials-card__error">"Backend Error: " {message}</p>
                            }
                        })
                    }}
                </div>

                <section class="dashboard-page__orders">
                    <h2>"Your Orders"</h2>
                    {move || {
                        let state = dashboard.get();
                        if state.loading {
                            view! { <p class="dashboard-page__loading">"Loading orders..."</p> }
                                .into_any()
                        } else {
                            view! { <OrderTable orders=state.orders/> }.into_any()
                        }
                    }}
                </section>
            </div>
        </div>
    }
}
