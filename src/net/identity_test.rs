use super::*;

use std::cell::RefCell;

use futures::executor::block_on;

fn recorder(listeners: &Listeners) -> (Subscription, Rc<RefCell<Vec<Option<Session>>>>) {
    let seen: Rc<RefCell<Vec<Option<Session>>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let subscription = listeners.subscribe(Rc::new(move |change| {
        sink.borrow_mut().push(change);
    }));
    (subscription, seen)
}

fn session(uid: &str) -> Session {
    Session { uid: uid.to_owned(), email: format!("{uid}@example.com") }
}

// =============================================================
// Error classification
// =============================================================

#[test]
fn classify_credential_codes_as_invalid_credentials() {
    for code in ["EMAIL_NOT_FOUND", "INVALID_PASSWORD", "INVALID_LOGIN_CREDENTIALS"] {
        assert_eq!(classify_auth_error(code), IdentityError::InvalidCredentials);
    }
}

#[test]
fn classify_email_exists() {
    assert_eq!(classify_auth_error("EMAIL_EXISTS"), IdentityError::EmailAlreadyInUse);
}

#[test]
fn classify_unknown_code_passes_through() {
    assert_eq!(
        classify_auth_error("TOO_MANY_ATTEMPTS_TRY_LATER"),
        IdentityError::Other("TOO_MANY_ATTEMPTS_TRY_LATER".to_owned())
    );
}

#[test]
fn auth_error_code_reads_nested_message() {
    let body = r#"{"error":{"code":400,"message":"EMAIL_NOT_FOUND"}}"#;
    assert_eq!(auth_error_code(body), Some("EMAIL_NOT_FOUND".to_owned()));
}

#[test]
fn auth_error_code_rejects_other_shapes() {
    assert_eq!(auth_error_code("not json"), None);
    assert_eq!(auth_error_code(r#"{"message":"nope"}"#), None);
}

// =============================================================
// Listeners and subscriptions
// =============================================================

#[test]
fn notify_reaches_every_subscriber() {
    let listeners = Listeners::default();
    let (_sub_a, seen_a) = recorder(&listeners);
    let (_sub_b, seen_b) = recorder(&listeners);

    listeners.notify(Some(session("uid-1")));

    assert_eq!(seen_a.borrow().len(), 1);
    assert_eq!(seen_b.borrow().len(), 1);
}

#[test]
fn dropped_subscription_stops_delivery() {
    let listeners = Listeners::default();
    let (subscription, seen) = recorder(&listeners);

    listeners.notify(None);
    drop(subscription);
    listeners.notify(Some(session("uid-1")));

    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(listeners.len(), 0);
}

#[test]
fn subscribe_during_notify_does_not_disturb_delivery() {
    let listeners = Listeners::default();
    let inner = Listeners::clone(&listeners);
    let late: Rc<RefCell<Vec<Subscription>>> = Rc::default();
    let late_subs = Rc::clone(&late);

    let _sub = listeners.subscribe(Rc::new(move |_| {
        let sink: Rc<RefCell<Vec<Option<Session>>>> = Rc::default();
        let subscription = inner.subscribe(Rc::new(move |change| {
            sink.borrow_mut().push(change);
        }));
        late_subs.borrow_mut().push(subscription);
    }));

    listeners.notify(None);
    assert_eq!(listeners.len(), 2);
}

#[test]
fn subscription_outliving_registry_is_harmless() {
    let subscription = {
        let listeners = Listeners::default();
        let (subscription, _seen) = recorder(&listeners);
        subscription
    };
    drop(subscription);
}

// =============================================================
// RestIdentityProvider
// =============================================================

#[test]
fn sign_out_notifies_subscribers_with_none() {
    let provider = RestIdentityProvider::new();
    let (_subscription, seen) = recorder(&provider.listeners);

    block_on(provider.sign_out()).expect("sign out");

    assert_eq!(seen.borrow().as_slice(), [None]);
}

#[test]
fn identity_errors_have_user_facing_messages() {
    assert_eq!(IdentityError::InvalidCredentials.to_string(), "invalid email or password");
    assert_eq!(IdentityError::EmailAlreadyInUse.to_string(), "email already in use");
    assert_eq!(IdentityError::Other("offline".to_owned()).to_string(), "offline");
}
