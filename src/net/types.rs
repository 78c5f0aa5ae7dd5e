#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A single order row as returned by the orders endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderRecord {
    pub order_id: u64,
    pub category: String,
    pub order_request: String,
    pub request_address: String,
    pub order_status: String,
}

impl OrderRecord {
    /// Whether this order has been cancelled. The backend uses the
    /// exact string `"Cancelled"`; any other casing is a live status.
    pub fn is_cancelled(&self) -> bool {
        self.order_status == "Cancelled"
    }
}

/// Response from `GET /api/admin/adminid/{uid}`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct AdminIdResponse {
    pub admin_id: String,
}

/// Response from `GET /api/admin/orders/{admin_id}`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<OrderRecord>,
}

/// Request body for `POST /api/admin/register`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RegisterAdminRequest {
    #[serde(rename = "firebase_uid")]
    pub uid: String,
    pub email: String,
    pub admin_id: String,
}

/// Error body shape shared by backend endpoints.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
