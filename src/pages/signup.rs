//! Signup page: create an account at the identity provider, then register
//! the admin id with the backend.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiError;
use crate::net::identity::{IdentityError, IdentityProvider};
use crate::net::types::RegisterAdminRequest;

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

/// Local password check, applied before any network call.
pub(crate) fn password_error(password: &str) -> Option<String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        Some("Password must be at least 6 characters.".to_owned())
    } else {
        None
    }
}

/// Notice shown when the account exists but backend registration failed.
/// The user can still log in, so the flow continues.
pub(crate) fn registration_warning(message: &str) -> String {
    format!("Signup successful, but failed to save details: {message}. Try logging in.")
}

/// Signup page. Account creation does not sign the new user in; after a
/// successful signup the user is sent to the login page.
#[component]
pub fn SignupPage() -> impl IntoView {
    let provider = expect_context::<StoredValue<Rc<dyn IdentityProvider>, LocalStorage>>();
    let navigate = use_navigate();

    let admin_id = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |_| {
        if pending.get_untracked() {
            return;
        }
        let admin_id_value = admin_id.get_untracked().trim().to_owned();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if admin_id_value.is_empty() || email_value.is_empty() {
            return;
        }
        error.set(None);
        if let Some(message) = password_error(&password_value) {
            error.set(Some(message));
            return;
        }
        pending.set(true);

        let navigate = navigate.clone();
        let create = provider.with_value(|p| p.create_account(&email_value, &password_value));
        leptos::task::spawn_local(async move {
            match create.await {
                Ok(session) => {
                    let request = RegisterAdminRequest {
                        uid: session.uid,
                        email: email_value,
                        admin_id: admin_id_value,
                    };
                    if let Err(err) = crate::net::api::register_admin(&request).await {
                        // Non-fatal: the account exists, so still guide
                        // the user to log in.
                        leptos::logging::warn!("backend registration failed: {err}");
                        let message = match &err {
                            ApiError::Status { message, .. } => message.clone(),
                            _ => "Failed to save details to backend DB.".to_owned(),
                        };
                        error.set(Some(registration_warning(&message)));
                    }
                    notify_signup_complete();
                    navigate("/login", NavigateOptions::default());
                }
                Err(IdentityError::EmailAlreadyInUse) => {
                    error.set(Some("This email is already in use. Try logging in.".to_owned()));
                }
                Err(err) => {
                    error.set(Some(format!("Signup failed: {err}")));
                }
            }
            pending.set(false);
        });
    });

    view! {
        <div class="signup-page">
            <form
                class="auth-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <h2 class="auth-form__header">"Admin Sign Up"</h2>
                <input
                    class="auth-form__input"
                    type="text"
                    placeholder="Unique Admin ID (e.g., ADM-001)"
                    prop:value=move || admin_id.get()
                    on:input=move |ev| admin_id.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="Password (min 6 chars)"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing Up..." } else { "Sign Up" }}
                </button>
                {move || {
                    error.get().map(|message| view! { <p class="auth-form__error">{message}</p> })
                }}
                <p class="auth-form__footer">
                    "Already have an account? " <A href="/login">"Log In"</A>
                </p>
            </form>
        </div>
    }
}

/// Browser alert confirming signup before the redirect to login.
fn notify_signup_complete() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("Sign up successful! Please log in.");
        }
    }
}
