//! Identity provider client: credential flows and session notifications.
//!
//! The console never talks to the backend about passwords; accounts live
//! at an external identity provider reached over REST. `IdentityProvider`
//! is the seam between the UI and that service, with `RestIdentityProvider`
//! as the production implementation and fakes standing in for tests.
//!
//! SUBSCRIPTIONS
//! =============
//! Session changes are pushed to registered callbacks. A `Subscription`
//! unregisters its callback when dropped, so a torn-down UI never receives
//! a late notification. The first notification after `subscribe` reports
//! the session restored from storage (or `None`) and is always delivered
//! asynchronously.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use futures::future::LocalBoxFuture;

use crate::state::session::Session;

/// Failure of an identity-provider operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// Unknown email, wrong password, or the provider's combined code.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// Account creation with an email that already has an account.
    #[error("email already in use")]
    EmailAlreadyInUse,
    /// Any other provider or transport failure.
    #[error("{0}")]
    Other(String),
}

/// Callback invoked with the new session on every session change.
pub type SessionCallback = Rc<dyn Fn(Option<Session>)>;

/// Client-side interface to the identity provider.
///
/// Methods return boxed local futures so the trait stays object-safe;
/// everything runs on the single-threaded WASM executor.
pub trait IdentityProvider {
    /// Register `callback` for session-change notifications. The restored
    /// session (or `None`) is delivered asynchronously as the first call.
    fn subscribe(&self, callback: SessionCallback) -> Subscription;

    /// Exchange credentials for a session. On success the session is
    /// persisted and every subscriber is notified.
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> LocalBoxFuture<'static, Result<Session, IdentityError>>;

    /// Create a new account. The created session is returned but not
    /// persisted and subscribers are not notified; the caller decides
    /// whether the new user proceeds to sign in.
    fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> LocalBoxFuture<'static, Result<Session, IdentityError>>;

    /// End the current session. Subscribers are notified with `None`.
    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), IdentityError>>;
}

#[derive(Default)]
struct ListenerTable {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, SessionCallback)>>,
}

/// Registry of session-change callbacks shared by provider clones.
#[derive(Clone, Default)]
pub struct Listeners {
    table: Rc<ListenerTable>,
}

impl Listeners {
    /// Add `callback` to the registry until the returned subscription
    /// is dropped.
    pub fn subscribe(&self, callback: SessionCallback) -> Subscription {
        let id = self.table.next_id.get();
        self.table.next_id.set(id + 1);
        self.table.entries.borrow_mut().push((id, callback));
        Subscription { table: Rc::downgrade(&self.table), id }
    }

    /// Deliver `session` to every registered callback.
    pub fn notify(&self, session: Option<Session>) {
        // Snapshot first so a callback may subscribe or unsubscribe
        // without holding the borrow.
        let callbacks: Vec<SessionCallback> = self
            .table
            .entries
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(session.clone());
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.table.entries.borrow().len()
    }
}

/// Handle for a registered session callback. Dropping it unregisters
/// the callback.
pub struct Subscription {
    table: Weak<ListenerTable>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.entries.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Production identity provider speaking the REST account API.
#[derive(Clone, Default)]
pub struct RestIdentityProvider {
    listeners: Listeners,
}

impl RestIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityProvider for RestIdentityProvider {
    fn subscribe(&self, callback: SessionCallback) -> Subscription {
        let subscription = self.listeners.subscribe(Rc::clone(&callback));
        #[cfg(feature = "hydrate")]
        {
            // Deliver the restored session after the caller has finished
            // wiring its state, never re-entrantly from subscribe.
            leptos::task::spawn_local(async move {
                callback(crate::util::session_store::read());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = callback;
        }
        subscription
    }

    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> LocalBoxFuture<'static, Result<Session, IdentityError>> {
        let listeners = self.listeners.clone();
        let email = email.to_owned();
        let password = password.to_owned();
        Box::pin(async move {
            #[cfg(feature = "hydrate")]
            {
                let session = request_account("signInWithPassword", &email, &password).await?;
                crate::util::session_store::write(&session);
                listeners.notify(Some(session.clone()));
                Ok(session)
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (listeners, email, password);
                Err(IdentityError::Other("not available on server".to_owned()))
            }
        })
    }

    fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> LocalBoxFuture<'static, Result<Session, IdentityError>> {
        let email = email.to_owned();
        let password = password.to_owned();
        Box::pin(async move {
            #[cfg(feature = "hydrate")]
            {
                request_account("signUp", &email, &password).await
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (email, password);
                Err(IdentityError::Other("not available on server".to_owned()))
            }
        })
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), IdentityError>> {
        let listeners = self.listeners.clone();
        Box::pin(async move {
            crate::util::session_store::clear();
            listeners.notify(None);
            Ok(())
        })
    }
}

/// Extract the provider's error code from a failure response body of the
/// shape `{"error": {"message": "CODE"}}`.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
pub(crate) fn auth_error_code(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(ToOwned::to_owned)
}

/// Map a provider error code onto [`IdentityError`].
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
pub(crate) fn classify_auth_error(code: &str) -> IdentityError {
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            IdentityError::InvalidCredentials
        }
        "EMAIL_EXISTS" => IdentityError::EmailAlreadyInUse,
        other => IdentityError::Other(other.to_owned()),
    }
}

#[cfg(feature = "hydrate")]
#[derive(serde::Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct AccountResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
}

/// POST credentials to `{base}/v1/accounts:{endpoint}?key={key}` and
/// decode the resulting account into a session.
#[cfg(feature = "hydrate")]
async fn request_account(
    endpoint: &str,
    email: &str,
    password: &str,
) -> Result<Session, IdentityError> {
    let url = format!(
        "{}/v1/accounts:{endpoint}?key={}",
        crate::config::identity_base_url(),
        crate::config::identity_api_key(),
    );
    let body = CredentialsRequest { email, password, return_secure_token: true };
    let resp = gloo_net::http::Request::post(&url)
        .json(&body)
        .map_err(|e| IdentityError::Other(e.to_string()))?
        .send()
        .await
        .map_err(|e| IdentityError::Other(e.to_string()))?;
    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        let code = auth_error_code(&text)
            .unwrap_or_else(|| format!("account request failed: {}", resp.status()));
        return Err(classify_auth_error(&code));
    }
    let account: AccountResponse = resp
        .json()
        .await
        .map_err(|e| IdentityError::Other(e.to_string()))?;
    Ok(Session { uid: account.local_id, email: account.email })
}
