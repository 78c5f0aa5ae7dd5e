#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::admin_data::{AdminData, FetchError};
use crate::net::types::OrderRecord;

/// Placeholder shown as the admin id when resolution failed.
pub const ADMIN_ID_ERROR: &str = "N/A (Error)";

/// Dashboard fetch state: resolved admin id, order list, and the
/// loading/error flags driving the page.
///
/// Each fetch is tagged with a generation token handed out by `begin`.
/// `apply` discards outcomes carrying a stale token, so a slow response
/// from a superseded fetch can never overwrite newer data.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub admin_id: String,
    pub orders: Vec<OrderRecord>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl DashboardState {
    /// Start a new fetch. Returns the generation token the eventual
    /// outcome must present to [`apply`](Self::apply).
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Record the outcome of the fetch started with `generation`.
    ///
    /// A stale token means the fetch was superseded or the session ended
    /// while it was in flight; the outcome is dropped unseen.
    pub fn apply(&mut self, generation: u64, outcome: Result<AdminData, FetchError>) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
        match outcome {
            Ok(data) => {
                self.admin_id = data.admin_id;
                self.orders = data.orders;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.orders.clear();
                match err {
                    FetchError::IdentifierResolution(_) => {
                        self.admin_id = ADMIN_ID_ERROR.to_owned();
                    }
                    FetchError::OrderFetch { admin_id, .. } => {
                        // Step one succeeded; keep the resolved id visible.
                        self.admin_id = admin_id;
                    }
                }
            }
        }
    }

    /// Drop all fetched data and invalidate any in-flight fetch.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.admin_id.clear();
        self.orders.clear();
        self.loading = false;
        self.error = None;
    }
}
