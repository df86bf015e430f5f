//! Shared test utilities and constants.

use huobi_ws::models::{AccountType, AccountTypeMap};

/// Spot account id used throughout the fixtures.
pub const SPOT_ACCOUNT_ID: i64 = 10057288;

/// Account map that knows only the fixture spot account.
pub fn spot_accounts() -> AccountTypeMap {
    [(SPOT_ACCOUNT_ID, AccountType::Spot)].into_iter().collect()
}
