//! Order record models shared by the `orders.list` and `orders.detail`
//! responses.

use std::fmt;

use rust_decimal::Decimal;

use super::account::AccountType;
use crate::Result;
use crate::json::JsonWrapper;
use crate::timestamp::convert_cst_millis_to_utc;

/// Order type, combining side and execution style (e.g. `buy-limit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    BuyMarket,
    SellMarket,
    BuyLimit,
    SellLimit,
    BuyIoc,
    SellIoc,
    BuyLimitMaker,
    SellLimitMaker,
    BuyStopLimit,
    SellStopLimit,
    BuyLimitFok,
    SellLimitFok,
    BuyStopLimitFok,
    SellStopLimitFok,
    Invalid,
}

impl OrderType {
    /// Returns the wire-format name used by the Huobi API.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::BuyMarket => "buy-market",
            OrderType::SellMarket => "sell-market",
            OrderType::BuyLimit => "buy-limit",
            OrderType::SellLimit => "sell-limit",
            OrderType::BuyIoc => "buy-ioc",
            OrderType::SellIoc => "sell-ioc",
            OrderType::BuyLimitMaker => "buy-limit-maker",
            OrderType::SellLimitMaker => "sell-limit-maker",
            OrderType::BuyStopLimit => "buy-stop-limit",
            OrderType::SellStopLimit => "sell-stop-limit",
            OrderType::BuyLimitFok => "buy-limit-fok",
            OrderType::SellLimitFok => "sell-limit-fok",
            OrderType::BuyStopLimitFok => "buy-stop-limit-fok",
            OrderType::SellStopLimitFok => "sell-stop-limit-fok",
            OrderType::Invalid => "invalid",
        }
    }
}

impl From<&str> for OrderType {
    fn from(value: &str) -> Self {
        match value {
            "buy-market" => OrderType::BuyMarket,
            "sell-market" => OrderType::SellMarket,
            "buy-limit" => OrderType::BuyLimit,
            "sell-limit" => OrderType::SellLimit,
            "buy-ioc" => OrderType::BuyIoc,
            "sell-ioc" => OrderType::SellIoc,
            "buy-limit-maker" => OrderType::BuyLimitMaker,
            "sell-limit-maker" => OrderType::SellLimitMaker,
            "buy-stop-limit" => OrderType::BuyStopLimit,
            "sell-stop-limit" => OrderType::SellStopLimit,
            "buy-limit-fok" => OrderType::BuyLimitFok,
            "sell-limit-fok" => OrderType::SellLimitFok,
            "buy-stop-limit-fok" => OrderType::BuyStopLimitFok,
            "sell-stop-limit-fok" => OrderType::SellStopLimitFok,
            _ => OrderType::Invalid,
        }
    }
}

/// Channel through which an order was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderSource {
    Sys,
    Web,
    Api,
    App,
    FlSys,
    FlMgt,
    SpotWeb,
    SpotApi,
    SpotApp,
    MarginApi,
    MarginWeb,
    MarginApp,
    SuperMarginApi,
    SuperMarginWeb,
    SuperMarginApp,
    SuperMarginFlSys,
    SuperMarginFlMgt,
    Invalid,
}

impl OrderSource {
    /// Returns the wire-format name used by the Huobi API.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSource::Sys => "sys",
            OrderSource::Web => "web",
            OrderSource::Api => "api",
            OrderSource::App => "app",
            OrderSource::FlSys => "fl-sys",
            OrderSource::FlMgt => "fl-mgt",
            OrderSource::SpotWeb => "spot-web",
            OrderSource::SpotApi => "spot-api",
            OrderSource::SpotApp => "spot-app",
            OrderSource::MarginApi => "margin-api",
            OrderSource::MarginWeb => "margin-web",
            OrderSource::MarginApp => "margin-app",
            OrderSource::SuperMarginApi => "super-margin-api",
            OrderSource::SuperMarginWeb => "super-margin-web",
            OrderSource::SuperMarginApp => "super-margin-app",
            OrderSource::SuperMarginFlSys => "super-margin-fl-sys",
            OrderSource::SuperMarginFlMgt => "super-margin-fl-mgt",
            OrderSource::Invalid => "invalid",
        }
    }
}

impl From<&str> for OrderSource {
    fn from(value: &str) -> Self {
        match value {
            "sys" => OrderSource::Sys,
            "web" => OrderSource::Web,
            "api" => OrderSource::Api,
            "app" => OrderSource::App,
            "fl-sys" => OrderSource::FlSys,
            "fl-mgt" => OrderSource::FlMgt,
            "spot-web" => OrderSource::SpotWeb,
            "spot-api" => OrderSource::SpotApi,
            "spot-app" => OrderSource::SpotApp,
            "margin-api" => OrderSource::MarginApi,
            "margin-web" => OrderSource::MarginWeb,
            "margin-app" => OrderSource::MarginApp,
            "super-margin-api" => OrderSource::SuperMarginApi,
            "super-margin-web" => OrderSource::SuperMarginWeb,
            "super-margin-app" => OrderSource::SuperMarginApp,
            "super-margin-fl-sys" => OrderSource::SuperMarginFlSys,
            "super-margin-fl-mgt" => OrderSource::SuperMarginFlMgt,
            _ => OrderSource::Invalid,
        }
    }
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderState {
    PreSubmitted,
    Submitting,
    Submitted,
    PartialFilled,
    Cancelling,
    PartialCanceled,
    Filled,
    Canceled,
    Failed,
    PlaceTimeout,
    Invalid,
}

impl OrderState {
    /// Returns the wire-format name used by the Huobi API.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::PreSubmitted => "pre-submitted",
            OrderState::Submitting => "submitting",
            OrderState::Submitted => "submitted",
            OrderState::PartialFilled => "partial-filled",
            OrderState::Cancelling => "cancelling",
            OrderState::PartialCanceled => "partial-canceled",
            OrderState::Filled => "filled",
            OrderState::Canceled => "canceled",
            OrderState::Failed => "failed",
            OrderState::PlaceTimeout => "place_timeout",
            OrderState::Invalid => "invalid",
        }
    }
}

impl From<&str> for OrderState {
    fn from(value: &str) -> Self {
        match value {
            "pre-submitted" => OrderState::PreSubmitted,
            "submitting" => OrderState::Submitting,
            "submitted" => OrderState::Submitted,
            "partial-filled" => OrderState::PartialFilled,
            "cancelling" => OrderState::Cancelling,
            "partial-canceled" => OrderState::PartialCanceled,
            "filled" => OrderState::Filled,
            "canceled" => OrderState::Canceled,
            "failed" => OrderState::Failed,
            "place_timeout" => OrderState::PlaceTimeout,
            _ => OrderState::Invalid,
        }
    }
}

/// A single order as carried in an order-list or order-detail response.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    // -- Identifiers --
    pub order_id: i64,
    pub symbol: String,
    pub account_type: AccountType,

    // -- Order details --
    pub order_type: OrderType,
    pub source: OrderSource,
    pub state: OrderState,
    pub amount: Decimal,
    pub price: Decimal,
    pub stop_price: Decimal,
    pub operator: String,

    // -- Fills --
    pub filled_amount: Decimal,
    pub filled_cash_amount: Decimal,
    pub filled_fees: Decimal,

    // -- Timestamps (UTC millis, 0 when unset) --
    pub created_timestamp: i64,
    pub finished_timestamp: i64,
    pub canceled_timestamp: i64,
}

impl Order {
    /// Parses one order object, tagging it with an already-resolved account type.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or mistyped.
    pub fn parse(json: &JsonWrapper<'_>, account_type: AccountType) -> Result<Self> {
        Ok(Self {
            order_id: json.get_int("id")?,
            symbol: json.get_string("symbol")?,
            account_type,
            order_type: OrderType::from(json.get_string("type")?.as_str()),
            source: OrderSource::from(json.get_string("source")?.as_str()),
            state: OrderState::from(json.get_string("state")?.as_str()),
            amount: json.get_decimal("amount")?,
            price: json.get_decimal("price")?,
            stop_price: json.get_decimal_or_default("stop-price", Decimal::ZERO)?,
            operator: json.get_string_or_default("operator", "")?,
            filled_amount: json.get_decimal("filled-amount")?,
            filled_cash_amount: json.get_decimal("filled-cash-amount")?,
            filled_fees: json.get_decimal("filled-fees")?,
            created_timestamp: convert_cst_millis_to_utc(json.get_int("created-at")?),
            finished_timestamp: convert_cst_millis_to_utc(
                json.get_int_or_default("finished-at", 0)?,
            ),
            canceled_timestamp: convert_cst_millis_to_utc(
                json.get_int_or_default("canceled-at", 0)?,
            ),
        })
    }

    /// Writes one `Name : value` line per field, each preceded by `prefix`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    pub fn write_fields<W: fmt::Write>(&self, out: &mut W, prefix: &str) -> fmt::Result {
        writeln!(out, "{prefix}Order Id : {}", self.order_id)?;
        writeln!(out, "{prefix}Symbol : {}", self.symbol)?;
        writeln!(out, "{prefix}Account Type : {}", self.account_type.as_str())?;
        writeln!(out, "{prefix}Order Type : {}", self.order_type.as_str())?;
        writeln!(out, "{prefix}Source : {}", self.source.as_str())?;
        writeln!(out, "{prefix}State : {}", self.state.as_str())?;
        writeln!(out, "{prefix}Amount : {}", self.amount)?;
        writeln!(out, "{prefix}Price : {}", self.price)?;
        writeln!(out, "{prefix}Stop Price : {}", self.stop_price)?;
        writeln!(out, "{prefix}Operator : {}", self.operator)?;
        writeln!(out, "{prefix}Filled Amount : {}", self.filled_amount)?;
        writeln!(out, "{prefix}Filled Cash Amount : {}", self.filled_cash_amount)?;
        writeln!(out, "{prefix}Filled Fees : {}", self.filled_fees)?;
        writeln!(out, "{prefix}Create Time : {}", self.created_timestamp)?;
        writeln!(out, "{prefix}Finish Time : {}", self.finished_timestamp)?;
        writeln!(out, "{prefix}Cancel Time : {}", self.canceled_timestamp)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_fields(f, "")
    }
}
