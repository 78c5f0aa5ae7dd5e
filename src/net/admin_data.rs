//! Two-step dashboard data fetch.
//!
//! The orders endpoint is keyed by admin id, not by the identity
//! provider's uid, so the dashboard first resolves the uid into an
//! admin id and only then lists orders. The pipeline is generic over
//! its transport steps so the sequencing rules run under native tests.

#[cfg(test)]
#[path = "admin_data_test.rs"]
mod admin_data_test;

use std::future::Future;

use super::api::ApiError;
use super::types::OrderRecord;

/// Everything the dashboard needs, produced by the two-step fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminData {
    pub admin_id: String,
    pub orders: Vec<OrderRecord>,
}

/// Failure of the two-step fetch, identifying which step broke.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Step one failed; no admin id exists for the uid.
    #[error("{0}")]
    IdentifierResolution(#[source] ApiError),
    /// Step two failed after the admin id was already resolved.
    #[error("{source}")]
    OrderFetch {
        admin_id: String,
        #[source]
        source: ApiError,
    },
}

/// Run the two-step fetch with injectable transport steps.
///
/// The second step runs only when the first succeeds. A second-step
/// failure still carries the admin id resolved by the first step so the
/// UI can show it alongside the error.
pub async fn fetch_admin_data<IdFut, OrdersFut>(
    uid: &str,
    resolve_id: impl FnOnce(String) -> IdFut,
    list_orders: impl FnOnce(String) -> OrdersFut,
) -> Result<AdminData, FetchError>
where
    IdFut: Future<Output = Result<String, ApiError>>,
    OrdersFut: Future<Output = Result<Vec<OrderRecord>, ApiError>>,
{
    let admin_id = resolve_id(uid.to_owned())
        .await
        .map_err(FetchError::IdentifierResolution)?;
    let orders = list_orders(admin_id.clone())
        .await
        .map_err(|source| FetchError::OrderFetch { admin_id: admin_id.clone(), source })?;
    Ok(AdminData { admin_id, orders })
}

/// Fetch dashboard data for `uid` against the live backend endpoints.
///
/// # Errors
///
/// Returns `FetchError` naming the failing step.
pub async fn fetch_for_session(uid: &str) -> Result<AdminData, FetchError> {
    fetch_admin_data(
        uid,
        |uid| async move { super::api::fetch_admin_id(&uid).await.map(|r| r.admin_id) },
        |admin_id| async move { super::api::fetch_orders(&admin_id).await.map(|r| r.orders) },
    )
    .await
}
