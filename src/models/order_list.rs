//! `orders.list` response mapping.
//!
//! Builds a typed [`OrderListResponse`] from a decoded push message and
//! backfills the symbol when the server omits it.

use std::fmt;

use super::account::AccountTypeMap;
use super::order::Order;
use crate::Result;
use crate::json::JsonWrapper;
use crate::timestamp::convert_cst_millis_to_utc;

/// Orders returned for an `orders.list` request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderListResponse {
    /// Market symbol; empty until filled by the server or
    /// [`normalize_symbol`](Self::normalize_symbol).
    pub symbol: String,
    /// Server timestamp in UTC milliseconds.
    pub timestamp: i64,
    pub client_req_id: String,
    pub topic: String,
    /// Orders in the order received. Always empty when `err-code != 0`.
    pub orders: Vec<Order>,
}

impl OrderListResponse {
    /// Parses an `orders.list` message envelope.
    ///
    /// The `data` array is only read when `err-code` is `0`; error responses
    /// yield an empty order list even if a `data` array is present.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or mistyped.
    pub fn parse(json: &JsonWrapper<'_>, accounts: &AccountTypeMap) -> Result<Self> {
        let err_code = json.get_int("err-code")?;

        let mut response = Self {
            symbol: json.get_string_or_default("symbol", "")?,
            timestamp: convert_cst_millis_to_utc(json.get_int("ts")?),
            client_req_id: json.get_string("cid")?,
            topic: json.get_string("topic")?,
            orders: Vec::new(),
        };

        if err_code == 0 {
            response.orders = json
                .get_array("data")?
                .iter()
                .map(|order| {
                    let account_type = accounts.resolve(order.get_int("account-id")?);
                    Order::parse(order, account_type)
                })
                .collect::<Result<_>>()?;
        }

        Ok(response)
    }

    /// Fills in `symbol`, first match wins:
    ///
    /// 1. a non-empty `symbol` argument,
    /// 2. the symbol of the first order,
    /// 3. otherwise the current value is kept.
    pub fn normalize_symbol(&mut self, symbol: Option<&str>) -> &mut Self {
        if let Some(symbol) = symbol.filter(|s| !s.is_empty()) {
            self.symbol = symbol.to_string();
            return self;
        }

        if let Some(first) = self.orders.first() {
            self.symbol = first.symbol.clone();
            return self;
        }

        self
    }
}

impl fmt::Display for OrderListResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbol : {}", self.symbol)?;
        writeln!(f, "Timestamp : {}", self.timestamp)?;
        writeln!(f, "Client Req ID : {}", self.client_req_id)?;
        writeln!(f, "Topic : {}", self.topic)?;
        writeln!(f, "Order List as below : count {}", self.orders.len())?;
        for order in &self.orders {
            order.write_fields(f, "\t ")?;
            writeln!(f)?;
        }
        Ok(())
    }
}
