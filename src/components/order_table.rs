//! Orders table for the dashboard.

#[cfg(test)]
#[path = "order_table_test.rs"]
mod order_table_test;

use leptos::prelude::*;

use crate::net::types::OrderRecord;

/// Row class for an order, marking cancelled orders for styling.
pub(crate) fn row_class(order: &OrderRecord) -> &'static str {
    if order.is_cancelled() {
        "order-table__row order-table__row--cancelled"
    } else {
        "order-table__row"
    }
}

/// Table listing the orders assigned to the signed-in admin.
#[component]
pub fn OrderTable(orders: Vec<OrderRecord>) -> impl IntoView {
    if orders.is_empty() {
        return view! { <p class="order-table__empty">"No orders found."</p> }.into_any();
    }

    view! {
        <table class="order-table">
            <thead>
                <tr>
                    <th>"Order ID"</th>
                    <th>"Category"</th>
                    <th>"Request"</th>
                    <th>"Address"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {orders
                    .into_iter()
                    .map(|order| {
                        let class = row_class(&order);
                        view! {
                            <tr class=class>
                                <td>{order.order_id}</td>
                                <td>{order.category}</td>
                                <td>{order.order_request}</td>
                                <td>{order.request_address}</td>
                                <td>{order.order_status}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
