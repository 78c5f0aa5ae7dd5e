//! Session persistence in `localStorage`.
//!
//! The identity provider's session survives page reloads by round-tripping
//! through `localStorage` as JSON. Requires a browser environment; every
//! function is a no-op (or `None`) during server rendering.

use crate::state::session::Session;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "admin_console_session";

/// Read the persisted session from localStorage.
///
/// Returns `None` when nothing is stored or the stored value does not
/// parse, treating a corrupt entry the same as signed out.
pub fn read() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `session` to localStorage.
pub fn write(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(raw) = serde_json::to_string(session) {
                    let _ = storage.set_item(STORAGE_KEY, &raw);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove the persisted session, if any.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
