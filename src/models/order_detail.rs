//! `orders.detail` response mapping.

use std::fmt;

use super::account::AccountTypeMap;
use super::order::Order;
use crate::Result;
use crate::json::JsonWrapper;
use crate::timestamp::convert_cst_millis_to_utc;

/// A single order returned for an `orders.detail` request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDetailResponse {
    pub symbol: String,
    /// Server timestamp in UTC milliseconds.
    pub timestamp: i64,
    pub client_req_id: String,
    pub topic: String,
    /// `None` when the server reported a non-zero `err-code`.
    pub order: Option<Order>,
}

impl OrderDetailResponse {
    /// Parses an `orders.detail` message envelope.
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
            order: None,
        };

        if err_code == 0 {
            let data = json.get_object("data")?;
            let account_type = accounts.resolve(data.get_int("account-id")?);
            response.order = Some(Order::parse(&data, account_type)?);
        }

        Ok(response)
    }

    /// Fills in `symbol` from the argument, then from the order, else keeps it.
    pub fn normalize_symbol(&mut self, symbol: Option<&str>) -> &mut Self {
        if let Some(symbol) = symbol.filter(|s| !s.is_empty()) {
            self.symbol = symbol.to_string();
            return self;
        }

        if let Some(order) = &self.order {
            self.symbol = order.symbol.clone();
        }

        self
    }
}

impl fmt::Display for OrderDetailResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbol : {}", self.symbol)?;
        writeln!(f, "Timestamp : {}", self.timestamp)?;
        writeln!(f, "Client Req ID : {}", self.client_req_id)?;
        writeln!(f, "Topic : {}", self.topic)?;
        if let Some(order) = &self.order {
            order.write_fields(f, "\t ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::account::AccountType;

    fn detail(err_code: i64) -> serde_json::Value {
        json!({
            "op": "req",
            "ts": 1569313176281_i64,
            "topic": "orders.detail",
            "err-code": err_code,
            "cid": "1569313176210",
            "data": {
                "id": 48902976275_i64,
                "symbol": "eosusdt",
                "account-id": 10057288,
                "amount": "10.000000000000000000",
                "price": "0.0",
                "created-at": 1569033319999_i64,
                "type": "sell-market",
                "finished-at": 1569033320090_i64,
                "source": "spot-app",
                "state": "filled",
                "canceled-at": 0,
                "filled-amount": "10.000000000000000000",
                "filled-cash-amount": "40.583000000000000000",
                "filled-fees": "0.081166000000000000"
            }
        })
    }

    #[test]
    fn parses_single_order() {
        let accounts: AccountTypeMap = [(10057288, AccountType::Spot)].into_iter().collect();
        let value = detail(0);
        let json = JsonWrapper::new(&value).unwrap();

        let mut response = OrderDetailResponse::parse(&json, &accounts).unwrap();
        response.normalize_symbol(None);

        let order = response.order.as_ref().unwrap();
        assert_eq!(order.order_id, 48902976275);
        assert_eq!(order.account_type, AccountType::Spot);
        assert_eq!(response.symbol, "eosusdt");
        assert_eq!(response.client_req_id, "1569313176210");
    }

    #[test]
    fn error_code_leaves_order_empty() {
        let value = detail(1);
        let json = JsonWrapper::new(&value).unwrap();

        let mut response = OrderDetailResponse::parse(&json, &AccountTypeMap::new()).unwrap();
        assert!(response.order.is_none());
        assert_eq!(response.normalize_symbol(None).symbol, "");
    }
}
