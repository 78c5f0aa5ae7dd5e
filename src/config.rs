//! Deployment configuration resolved at build time.
//!
//! Base URLs and the identity API key are baked into the binary via
//! `option_env!` so a deployment can point the console at a different
//! backend without code changes. Defaults suit local development behind
//! a reverse proxy that serves the API on the same origin.

/// Base URL for the order-management backend. Empty means same-origin
/// relative requests.
pub fn api_base_url() -> &'static str {
    option_env!("ADMIN_API_BASE_URL").unwrap_or("")
}

/// Base URL for the identity provider's REST endpoints.
pub fn identity_base_url() -> &'static str {
    option_env!("IDENTITY_API_BASE_URL").unwrap_or("https://identitytoolkit.googleapis.com")
}

/// Public API key identifying this app to the identity provider.
pub fn identity_api_key() -> &'static str {
    option_env!("IDENTITY_API_KEY").unwrap_or("")
}
