//! Account models and the account-id → account-type lookup.
//!
//! Order payloads only carry a numeric `account-id`; the account type is
//! resolved through an [`AccountTypeMap`] built from the
//! `GET /v1/account/accounts` REST response or a cached JSON file.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Classification of a trading account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountType {
    Spot,
    Margin,
    Otc,
    Point,
    SuperMargin,
    Investment,
    Borrow,
    Minepool,
    Etf,
    Agency,
    /// Sentinel for unknown ids and unrecognised wire names.
    #[serde(other)]
    Invalid,
}

impl AccountType {
    /// Returns the wire-format name used by the Huobi API.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Spot => "spot",
            AccountType::Margin => "margin",
            AccountType::Otc => "otc",
            AccountType::Point => "point",
            AccountType::SuperMargin => "super-margin",
            AccountType::Investment => "investment",
            AccountType::Borrow => "borrow",
            AccountType::Minepool => "minepool",
            AccountType::Etf => "etf",
            AccountType::Agency => "agency",
            AccountType::Invalid => "invalid",
        }
    }
}

/// Account state reported by the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountState {
    Working,
    Lock,
    #[serde(other)]
    Invalid,
}

/// A single account from `GET /v1/account/accounts`.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: i64,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub subtype: String,
    pub state: AccountState,
}

/// Response envelope of `GET /v1/account/accounts`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsResponse {
    /// `"ok"` on success, `"error"` otherwise.
    pub status: String,
    #[serde(default)]
    pub data: Vec<Account>,
    #[serde(rename = "err-code", default)]
    pub err_code: Option<String>,
    #[serde(rename = "err-msg", default)]
    pub err_msg: Option<String>,
}

/// Read-only mapping from account id to account type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountTypeMap {
    types: HashMap<i64, AccountType>,
}

impl AccountTypeMap {
    /// Creates an empty map; every lookup resolves to [`AccountType::Invalid`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from REST account records.
    #[must_use]
    pub fn from_accounts(accounts: &[Account]) -> Self {
        accounts
            .iter()
            .map(|account| (account.id, account.account_type))
            .collect()
    }

    /// Loads a cached map from a JSON object of `{"<account-id>": "<type>"}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            crate::HuobiError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let map: Self = serde_json::from_str(&contents)?;
        Ok(map)
    }

    /// Records the type of an account, replacing any previous entry.
    pub fn insert(&mut self, account_id: i64, account_type: AccountType) {
        self.types.insert(account_id, account_type);
    }

    /// Resolves an account id, falling back to [`AccountType::Invalid`].
    #[must_use]
    pub fn resolve(&self, account_id: i64) -> AccountType {
        self.types
            .get(&account_id)
            .copied()
            .unwrap_or(AccountType::Invalid)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<(i64, AccountType)> for AccountTypeMap {
    fn from_iter<I: IntoIterator<Item = (i64, AccountType)>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().collect(),
        }
    }
}
