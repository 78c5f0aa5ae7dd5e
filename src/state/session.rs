#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::net::identity::{IdentityError, IdentityProvider, Subscription};

/// An authenticated identity-provider session.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub uid: String,
    pub email: String,
}

/// Session state tracking the current session and loading status.
///
/// `loading` starts `true` and flips to `false` permanently once the
/// identity provider has delivered its first notification. Until then
/// the app cannot tell "signed out" apart from "still resolving".
#[derive(Clone, Debug)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl SessionState {
    /// Record a session-change notification from the identity provider.
    ///
    /// The first call resolves the initial loading phase; every call
    /// replaces the current session wholesale.
    pub fn note_change(&mut self, session: Option<Session>) {
        self.session = session;
        self.loading = false;
    }

    /// Uid of the current session, if one is established.
    pub fn uid(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.uid.clone())
    }
}

/// What a guarded route should do for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Initial resolution still pending; render nothing yet.
    Wait,
    /// A session is established; render the protected content.
    Render,
    /// Resolved with no session; redirect to the login page.
    RedirectToLogin,
}

impl GuardDecision {
    /// Decide purely from the session state. A missing session never
    /// redirects while `loading` is still set, so a signed-in user is
    /// not bounced to login during startup.
    pub fn for_state(state: &SessionState) -> Self {
        if state.loading {
            Self::Wait
        } else if state.session.is_some() {
            Self::Render
        } else {
            Self::RedirectToLogin
        }
    }
}

/// Owns the identity-provider subscription for the lifetime of the app.
///
/// Created once at the root component; dropping it unsubscribes the
/// change callback so no notification is delivered to a dead UI.
pub struct SessionObserver {
    provider: Rc<dyn IdentityProvider>,
    _subscription: Subscription,
}

impl SessionObserver {
    /// Subscribe `on_change` to the provider's session notifications.
    ///
    /// The provider fires the callback once with the restored session
    /// (or `None`) shortly after subscription, which resolves the
    /// initial loading phase.
    pub fn new(
        provider: Rc<dyn IdentityProvider>,
        on_change: impl Fn(Option<Session>) + 'static,
    ) -> Self {
        let subscription = provider.subscribe(Rc::new(on_change));
        Self { provider, _subscription: subscription }
    }

    /// End the current session. Subscribers observe the change as a
    /// `None` notification.
    pub fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), IdentityError>> {
        self.provider.sign_out()
    }
}
