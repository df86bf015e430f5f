//! `orders.list` request models.
//!
//! The request is sent with `op = "req"` and answered once with an
//! [`OrderListResponse`](super::order_list::OrderListResponse).

use chrono::NaiveDate;
use serde::Serialize;

use super::Topic;
use super::order::{OrderState, OrderType};

/// Largest page size accepted by the server.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Paging direction relative to the `from` order id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryDirection {
    Prev,
    Next,
}

/// The `orders.list` request message.
#[derive(Debug, Clone, Serialize)]
pub struct OrderListRequest {
    op: &'static str,
    topic: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cid: Option<String>,
    #[serde(rename = "account-id")]
    pub account_id: i64,
    pub symbol: String,
    /// Comma-separated order states.
    pub states: String,
    /// Comma-separated order types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    #[serde(rename = "start-date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "end-date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(rename = "direct", skip_serializing_if = "Option::is_none")]
    pub direction: Option<QueryDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl OrderListRequest {
    /// Returns the client request id if set.
    #[must_use]
    pub fn cid(&self) -> Option<&str> {
        self.cid.as_deref()
    }
}

/// Builder for constructing `orders.list` requests.
#[derive(Debug, Clone)]
pub struct OrderListRequestBuilder {
    account_id: i64,
    symbol: String,
    states: Vec<OrderState>,
    types: Vec<OrderType>,
    start_date: Option<String>,
    end_date: Option<String>,
    from: Option<i64>,
    direction: Option<QueryDirection>,
    size: Option<u32>,
    cid: Option<String>,
}

impl OrderListRequestBuilder {
    /// Creates a builder for the orders of `symbol` in one account.
    #[must_use]
    pub fn new(account_id: i64, symbol: &str) -> Self {
        Self {
            account_id,
            symbol: symbol.to_string(),
            states: Vec::new(),
            types: Vec::new(),
            start_date: None,
            end_date: None,
            from: None,
            direction: None,
            size: None,
            cid: None,
        }
    }

    /// Sets the order states to query. At least one is required.
    #[must_use]
    pub fn with_states(mut self, states: Vec<OrderState>) -> Self {
        self.states = states;
        self
    }

    /// Restricts the query to the given order types.
    #[must_use]
    pub fn with_types(mut self, types: Vec<OrderType>) -> Self {
        self.types = types;
        self
    }

    /// Sets the first day to query, formatted `yyyy-mm-dd`.
    #[must_use]
    pub fn with_start_date(mut self, date: &str) -> Self {
        self.start_date = Some(date.to_string());
        self
    }

    /// Sets the last day to query, formatted `yyyy-mm-dd`.
    #[must_use]
    pub fn with_end_date(mut self, date: &str) -> Self {
        self.end_date = Some(date.to_string());
        self
    }

    /// Sets the order id to page from.
    #[must_use]
    pub fn with_from(mut self, order_id: i64) -> Self {
        self.from = Some(order_id);
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: QueryDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the page size (1 to [`MAX_PAGE_SIZE`]).
    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the client request id echoed back as `cid`.
    #[must_use]
    pub fn with_cid(mut self, cid: &str) -> Self {
        self.cid = Some(cid.to_string());
        self
    }

    /// Validates and builds the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol or states are empty, a date is
    /// malformed or the range is inverted, or the size is out of range.
    pub fn build(self) -> Result<OrderListRequest, OrderListRequestError> {
        self.validate()?;

        Ok(OrderListRequest {
            op: "req",
            topic: Topic::OrdersList.as_str(),
            cid: self.cid,
            account_id: self.account_id,
            symbol: self.symbol,
            states: join_wire_names(self.states.iter().map(OrderState::as_str)),
            types: (!self.types.is_empty())
                .then(|| join_wire_names(self.types.iter().map(OrderType::as_str))),
            start_date: self.start_date,
            end_date: self.end_date,
            from: self.from.map(|id| id.to_string()),
            direction: self.direction,
            size: self.size.map(|size| size.to_string()),
        })
    }

    fn validate(&self) -> Result<(), OrderListRequestError> {
        if self.symbol.is_empty() {
            return Err(OrderListRequestError::EmptySymbol);
        }

        if self.states.is_empty() {
            return Err(OrderListRequestError::NoStates);
        }

        if let Some(size) = self.size
            && !(1..=MAX_PAGE_SIZE).contains(&size)
        {
            return Err(OrderListRequestError::SizeOutOfRange(size));
        }

        let start = self.start_date.as_deref().map(parse_date).transpose()?;
        let end = self.end_date.as_deref().map(parse_date).transpose()?;
        if let (Some(start), Some(end)) = (start, end)
            && start > end
        {
            return Err(OrderListRequestError::InvertedDateRange);
        }

        Ok(())
    }
}

fn parse_date(date: &str) -> Result<NaiveDate, OrderListRequestError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| OrderListRequestError::InvalidDate(date.to_string()))
}

fn join_wire_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(",")
}

/// Errors that can occur when building an `orders.list` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderListRequestError {
    EmptySymbol,
    /// At least one order state must be provided.
    NoStates,
    SizeOutOfRange(u32),
    InvalidDate(String),
    InvertedDateRange,
}

impl std::fmt::Display for OrderListRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySymbol => write!(f, "symbol must not be empty"),
            Self::NoStates => write!(f, "at least one order state must be provided"),
            Self::SizeOutOfRange(size) => {
                write!(f, "size {size} must be between 1 and {MAX_PAGE_SIZE}")
            }
            Self::InvalidDate(date) => write!(f, "date {date:?} is not formatted yyyy-mm-dd"),
            Self::InvertedDateRange => write!(f, "start-date must not be after end-date"),
        }
    }
}

impl std::error::Error for OrderListRequestError {}
