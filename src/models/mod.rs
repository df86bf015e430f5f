//! Typed models for Huobi push/subscription messages.
//!
//! Contains topic definitions, the ping/pong keep-alive messages, and the
//! order, order-list, and account models.

pub mod account;
pub mod order;
pub mod order_detail;
pub mod order_list;
pub mod order_list_request;

use serde::{Deserialize, Serialize};

pub use account::{Account, AccountState, AccountType, AccountTypeMap, AccountsResponse};
pub use order::{Order, OrderSource, OrderState, OrderType};
pub use order_detail::OrderDetailResponse;
pub use order_list::OrderListResponse;
pub use order_list_request::{OrderListRequest, OrderListRequestBuilder, OrderListRequestError};

/// Request/response topics handled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// Paged order history (`"orders.list"`).
    OrdersList,
    /// A single order by id (`"orders.detail"`).
    OrdersDetail,
}

impl Topic {
    /// Returns the wire-format topic name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::OrdersList => "orders.list",
            Topic::OrdersDetail => "orders.detail",
        }
    }

    /// Looks up a topic by its wire name.
    pub fn from_wire(topic: &str) -> Option<Self> {
        match topic {
            "orders.list" => Some(Topic::OrdersList),
            "orders.detail" => Some(Topic::OrdersDetail),
            _ => None,
        }
    }
}

/// Keep-alive ping sent by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct PingMessage {
    pub op: String,
    pub ts: i64,
}

/// Reply to a [`PingMessage`], echoing its timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct PongMessage {
    op: &'static str,
    pub ts: i64,
}

impl PongMessage {
    #[must_use]
    pub fn new(ts: i64) -> Self {
        Self { op: "pong", ts }
    }
}
