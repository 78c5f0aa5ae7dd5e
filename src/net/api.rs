//! REST API helpers for communicating with the order-management backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>` so callers can surface the
//! backend's own error message. A non-2xx response is reported as
//! `HTTP Error {status}: {message}` with the message taken from the
//! response body when it parses, falling back to `Unknown Error`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AdminIdResponse, ErrorBody, OrdersResponse, RegisterAdminRequest};

/// Failure of a backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response, carrying the backend's error message.
    #[error("HTTP Error {status}: {message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// Browser-only endpoint called during server rendering.
    #[error("not available on server")]
    Unavailable,
}

/// Build the error for a non-2xx response from its status and raw body.
///
/// The backend reports failures as `{"message": "..."}`; anything that
/// does not parse that way is reported as `Unknown Error`.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
pub(crate) fn api_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| "Unknown Error".to_owned());
    ApiError::Status { status, message }
}

/// Fetch the admin identifier for an authenticated uid from
/// `GET /api/admin/adminid/{uid}`.
///
/// # Errors
///
/// Returns `ApiError` if the request fails or the backend rejects the uid.
pub async fn fetch_admin_id(uid: &str) -> Result<AdminIdResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/admin/adminid/{uid}", crate::config::api_base_url());
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = uid;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the orders assigned to an admin from
/// `GET /api/admin/orders/{admin_id}`.
///
/// # Errors
///
/// Returns `ApiError` if the request fails or the backend rejects the id.
pub async fn fetch_orders(admin_id: &str) -> Result<OrdersResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/admin/orders/{admin_id}", crate::config::api_base_url());
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = admin_id;
        Err(ApiError::Unavailable)
    }
}

/// Register a newly created account with the backend via
/// `POST /api/admin/register`.
///
/// # Errors
///
/// Returns `ApiError` if the request fails. Callers treat this as
/// non-fatal; the account already exists at the identity provider.
pub async fn register_admin(request: &RegisterAdminRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/admin/register", crate::config::api_base_url());
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(api_error(resp.status(), &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// GET `url` and decode a JSON body, mapping non-2xx responses through
/// [`api_error`].
#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(api_error(resp.status(), &body));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}
