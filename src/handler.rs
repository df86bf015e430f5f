//! Incoming push message processing.
//!
//! Messages arrive already decompressed as JSON text. [`dispatch_message`]
//! routes each one on its `op` and `topic` fields to the matching model
//! parser.

use tracing::{debug, warn};

use crate::Result;
use crate::json::{JsonWrapper, parse_json};
use crate::models::{
    AccountTypeMap, OrderDetailResponse, OrderListResponse, PingMessage, PongMessage, Topic,
};

/// A decoded push message.
#[derive(Debug, Clone, PartialEq)]
pub enum PushMessage {
    /// Server keep-alive carrying the timestamp to echo back.
    Ping(i64),
    /// Result of an authentication request.
    Auth { err_code: i64 },
    OrderList(OrderListResponse),
    OrderDetail(OrderDetailResponse),
    /// A message this crate does not map, labelled by its topic or op.
    Unhandled(String),
}

/// Parses one push message and routes it to the matching model.
///
/// `requested_symbol` is the symbol the caller asked for, used to
/// normalize responses that omit it.
///
/// # Errors
///
/// Returns a [`HuobiError`](crate::HuobiError) if the text is not a JSON
/// object, or if a routed message is missing required fields.
pub fn dispatch_message(
    text: &str,
    accounts: &AccountTypeMap,
    requested_symbol: Option<&str>,
) -> Result<PushMessage> {
    let value = parse_json(text)?;
    let json = JsonWrapper::new(&value)?;

    let op = json.get_string_or_default("op", "")?;
    match op.as_str() {
        "ping" => {
            let ping: PingMessage = serde_json::from_value(value.clone())?;
            debug!(ts = ping.ts, "Received ping");
            Ok(PushMessage::Ping(ping.ts))
        }
        "auth" => {
            let err_code = json.get_int("err-code")?;
            if err_code != 0 {
                warn!(err_code, "Authentication failed");
            }
            Ok(PushMessage::Auth { err_code })
        }
        "req" => handle_topic_message(&json, accounts, requested_symbol),
        other => {
            debug!(op = other, "Ignoring message");
            Ok(PushMessage::Unhandled(other.to_string()))
        }
    }
}

/// Handles replies to `req` requests. Subscription `notify` pushes carry no
/// `cid` and are left to the caller as [`PushMessage::Unhandled`].
fn handle_topic_message(
    json: &JsonWrapper<'_>,
    accounts: &AccountTypeMap,
    requested_symbol: Option<&str>,
) -> Result<PushMessage> {
    let topic = json.get_string("topic")?;
    let err_code = json.get_int_or_default("err-code", 0)?;
    if err_code != 0 {
        let err_msg = json.get_string_or_default("err-msg", "")?;
        warn!(topic, err_code, err_msg, "Server reported an error");
    }

    match Topic::from_wire(&topic) {
        Some(Topic::OrdersList) => {
            let mut response = OrderListResponse::parse(json, accounts)?;
            response.normalize_symbol(requested_symbol);
            debug!(
                topic,
                symbol = response.symbol,
                count = response.orders.len(),
                cid = response.client_req_id,
                "Received order list"
            );
            Ok(PushMessage::OrderList(response))
        }
        Some(Topic::OrdersDetail) => {
            let mut response = OrderDetailResponse::parse(json, accounts)?;
            response.normalize_symbol(requested_symbol);
            debug!(
                topic,
                symbol = response.symbol,
                cid = response.client_req_id,
                "Received order detail"
            );
            Ok(PushMessage::OrderDetail(response))
        }
        None => {
            warn!(topic, "Unhandled topic");
            Ok(PushMessage::Unhandled(topic))
        }
    }
}

/// Builds the pong reply text for a ping timestamp.
///
/// # Errors
///
/// Returns [`HuobiError::Json`](crate::HuobiError::Json) if serialization fails.
pub fn pong_message(ts: i64) -> Result<String> {
    Ok(serde_json::to_string(&PongMessage::new(ts))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;

    #[test]
    fn ping_round_trips_to_pong() {
        let text = r#"{"op":"ping","ts":1569307523736}"#;
        let message = dispatch_message(text, &AccountTypeMap::new(), None).unwrap();
        assert_eq!(message, PushMessage::Ping(1569307523736));

        let pong: serde_json::Value =
            serde_json::from_str(&pong_message(1569307523736).unwrap()).unwrap();
        assert_eq!(pong["op"], "pong");
        assert_eq!(pong["ts"], 1569307523736_i64);
    }

    #[test]
    fn auth_result_is_reported() {
        let text = r#"{"op":"auth","ts":1569307523736,"err-code":0,"data":{"user-id":12345678}}"#;
        let message = dispatch_message(text, &AccountTypeMap::new(), None).unwrap();
        assert_eq!(message, PushMessage::Auth { err_code: 0 });
    }

    #[test]
    fn order_list_is_normalized_with_requested_symbol() {
        let text = r#"{"op":"req","ts":1569307523736,"topic":"orders.list","err-code":0,"cid":"abc","data":[]}"#;
        let accounts: AccountTypeMap = [(10057288, AccountType::Spot)].into_iter().collect();

        match dispatch_message(text, &accounts, Some("eosusdt")).unwrap() {
            PushMessage::OrderList(response) => {
                assert_eq!(response.symbol, "eosusdt");
                assert!(response.orders.is_empty());
            }
            other => panic!("expected order list, got {other:?}"),
        }
    }

    #[test]
    fn unknown_topic_is_unhandled() {
        let text = r#"{"op":"req","ts":1569307523736,"topic":"accounts.list","err-code":0,"cid":"x","data":[]}"#;
        let message = dispatch_message(text, &AccountTypeMap::new(), None).unwrap();
        assert_eq!(message, PushMessage::Unhandled("accounts.list".to_string()));
    }

    #[test]
    fn unknown_op_is_unhandled() {
        let message = dispatch_message(r#"{"op":"close"}"#, &AccountTypeMap::new(), None).unwrap();
        assert_eq!(message, PushMessage::Unhandled("close".to_string()));
    }

    #[test]
    fn notify_push_is_not_mapped_as_a_reply() {
        let text = r#"{"op":"notify","ts":1569307523736,"topic":"orders.list","data":[]}"#;
        let message = dispatch_message(text, &AccountTypeMap::new(), None).unwrap();
        assert_eq!(message, PushMessage::Unhandled("notify".to_string()));
    }

    #[test]
    fn malformed_text_is_an_error() {
        assert!(dispatch_message("not json", &AccountTypeMap::new(), None).is_err());
        assert!(dispatch_message("[1,2]", &AccountTypeMap::new(), None).is_err());
    }
}
