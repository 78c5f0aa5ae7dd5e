use super::*;

use crate::net::api::ApiError;

fn order(order_id: u64, status: &str) -> OrderRecord {
    OrderRecord {
        order_id,
        category: "Grocery".to_owned(),
        order_request: "2x Milk".to_owned(),
        request_address: "12 Hill Road".to_owned(),
        order_status: status.to_owned(),
    }
}

fn data(admin_id: &str) -> AdminData {
    AdminData { admin_id: admin_id.to_owned(), orders: vec![order(1, "Pending")] }
}

fn not_found() -> ApiError {
    ApiError::Status { status: 404, message: "Admin not found".to_owned() }
}

// =============================================================
// Defaults and begin
// =============================================================

#[test]
fn dashboard_state_default_is_idle() {
    let state = DashboardState::default();
    assert!(!state.loading);
    assert!(state.admin_id.is_empty());
    assert!(state.orders.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn begin_sets_loading_and_clears_error() {
    let mut state = DashboardState::default();
    let generation = state.begin();
    state.apply(generation, Err(FetchError::IdentifierResolution(not_found())));
    assert!(state.error.is_some());

    state.begin();
    assert!(state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_success_populates_state() {
    let mut state = DashboardState::default();
    let generation = state.begin();
    state.apply(generation, Ok(data("ADM-7")));

    assert!(!state.loading);
    assert_eq!(state.admin_id, "ADM-7");
    assert_eq!(state.orders.len(), 1);
    assert!(state.error.is_none());
}

#[test]
fn apply_identifier_error_sets_placeholder() {
    let mut state = DashboardState::default();
    let generation = state.begin();
    state.apply(generation, Err(FetchError::IdentifierResolution(not_found())));

    assert!(!state.loading);
    assert_eq!(state.admin_id, ADMIN_ID_ERROR);
    assert!(state.orders.is_empty());
    assert_eq!(state.error.as_deref(), Some("HTTP Error 404: Admin not found"));
}

#[test]
fn apply_order_error_keeps_resolved_id() {
    let mut state = DashboardState::default();
    let generation = state.begin();
    state.apply(
        generation,
        Err(FetchError::OrderFetch {
            admin_id: "ADM-7".to_owned(),
            source: ApiError::Status { status: 500, message: "boom".to_owned() },
        }),
    );

    assert_eq!(state.admin_id, "ADM-7");
    assert!(state.orders.is_empty());
    assert_eq!(state.error.as_deref(), Some("HTTP Error 500: boom"));
}

#[test]
fn apply_error_clears_previous_orders() {
    let mut state = DashboardState::default();
    let generation = state.begin();
    state.apply(generation, Ok(data("ADM-7")));

    let generation = state.begin();
    state.apply(generation, Err(FetchError::IdentifierResolution(not_found())));
    assert!(state.orders.is_empty());
}

// =============================================================
// Generation tokens
// =============================================================

#[test]
fn stale_generation_is_discarded() {
    let mut state = DashboardState::default();
    let first = state.begin();
    let second = state.begin();

    state.apply(first, Ok(data("ADM-OLD")));
    assert!(state.loading);
    assert!(state.admin_id.is_empty());

    state.apply(second, Ok(data("ADM-NEW")));
    assert!(!state.loading);
    assert_eq!(state.admin_id, "ADM-NEW");
}

#[test]
fn clear_invalidates_in_flight_fetch() {
    let mut state = DashboardState::default();
    let generation = state.begin();
    state.clear();

    state.apply(generation, Ok(data("ADM-7")));
    assert!(!state.loading);
    assert!(state.admin_id.is_empty());
    assert!(state.orders.is_empty());
}

#[test]
fn clear_resets_fetched_data() {
    let mut state = DashboardState::default();
    let generation = state.begin();
    state.apply(generation, Ok(data("ADM-7")));

    state.clear();
    assert!(state.admin_id.is_empty());
    assert!(state.orders.is_empty());
    assert!(state.error.is_none());
    assert!(!state.loading);
}
