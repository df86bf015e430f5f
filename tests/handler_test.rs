//! Routing tests for decoded push messages.

mod common;

use huobi_ws::handler::{PushMessage, dispatch_message};
use huobi_ws::models::AccountType;

const ORDER_LIST_JSON: &str = include_str!("fixtures/order_list.json");
const ORDER_LIST_ERROR_JSON: &str = include_str!("fixtures/order_list_error.json");
const ORDER_DETAIL_JSON: &str = include_str!("fixtures/order_detail.json");
const ORDER_NOTIFY_JSON: &str = include_str!("fixtures/order_notify.json");

#[test]
fn test_order_list_routed_and_normalized() {
    let message = dispatch_message(ORDER_LIST_JSON, &common::spot_accounts(), None)
        .expect("Failed to dispatch order list");

    let response = match message {
        PushMessage::OrderList(response) => response,
        other => panic!("expected an order list, got {other:?}"),
    };
    assert_eq!(response.symbol, "eosusdt");
    assert_eq!(response.orders.len(), 2);
    assert_eq!(response.orders[0].account_type, AccountType::Spot);
}

#[test]
fn test_requested_symbol_overrides_orders() {
    let message = dispatch_message(ORDER_LIST_JSON, &common::spot_accounts(), Some("ethusdt"))
        .expect("Failed to dispatch order list");

    let response = match message {
        PushMessage::OrderList(response) => response,
        other => panic!("expected an order list, got {other:?}"),
    };
    assert_eq!(response.symbol, "ethusdt");
}

#[test]
fn test_error_response_routed_with_empty_orders() {
    let message = dispatch_message(ORDER_LIST_ERROR_JSON, &common::spot_accounts(), None)
        .expect("Failed to dispatch error response");

    let response = match message {
        PushMessage::OrderList(response) => response,
        other => panic!("expected an order list, got {other:?}"),
    };
    assert!(response.orders.is_empty());
    assert_eq!(response.symbol, "");
}

#[test]
fn test_order_detail_routed() {
    let message = dispatch_message(ORDER_DETAIL_JSON, &common::spot_accounts(), None)
        .expect("Failed to dispatch order detail");

    let response = match message {
        PushMessage::OrderDetail(response) => response,
        other => panic!("expected an order detail, got {other:?}"),
    };
    assert_eq!(response.symbol, "eosusdt");
    assert!(response.order.is_some());
}

#[test]
fn test_order_notify_left_unhandled() {
    let message = dispatch_message(ORDER_NOTIFY_JSON, &common::spot_accounts(), Some("eosusdt"))
        .expect("Failed to dispatch order notify");

    assert_eq!(message, PushMessage::Unhandled("notify".to_string()));
}
