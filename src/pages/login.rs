//! Login page with an email/password credentials form.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::identity::{IdentityError, IdentityProvider};

/// Login page. A successful sign-in navigates to the dashboard; the
/// session context updates through the provider's change notification.
#[component]
pub fn LoginPage() -> impl IntoView {
    let provider = expect_context::<StoredValue<Rc<dyn IdentityProvider>, LocalStorage>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |_| {
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }
        error.set(None);
        pending.set(true);

        let navigate = navigate.clone();
        let sign_in = provider.with_value(|p| p.sign_in(&email_value, &password_value));
        leptos::task::spawn_local(async move {
            match sign_in.await {
                Ok(_) => navigate("/dashboard", NavigateOptions::default()),
                Err(IdentityError::InvalidCredentials) => {
                    error.set(Some("Login failed: Invalid email or password.".to_owned()));
                }
                Err(err) => {
                    error.set(Some(format!("Login failed: {err}")));
                }
            }
            pending.set(false);
        });
    });

    view! {
        <div class="login-page">
            <form
                class="auth-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <h2 class="auth-form__header">"Admin Login"</h2>
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="Admin Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Logging In..." } else { "Log In" }}
                </button>
                {move || {
                    error.get().map(|message| view! { <p class="auth-form__error">{message}</p> })
                }}
                <p class="auth-form__footer">
                    "Not an admin? " <A href="/signup">"Sign Up Here"</A>
                </p>
            </form>
        </div>
    }
}
