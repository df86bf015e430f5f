//! REST calls that populate local lookup tables.

use tracing::{debug, info, warn};

use crate::Result;
use crate::auth::{signed_url, utc_timestamp};
use crate::config::HuobiConfig;
use crate::models::{AccountTypeMap, AccountsResponse};

const ACCOUNTS_PATH: &str = "/v1/account/accounts";

/// Builds the account lookup from the cache file, the REST API, or neither.
///
/// The cache file wins when configured. Without it or credentials every
/// account resolves to [`AccountType::Invalid`](crate::models::AccountType::Invalid).
///
/// # Errors
///
/// Returns a [`HuobiError`](crate::HuobiError) if the cache file cannot be
/// read or the REST fetch fails.
pub async fn load_account_types(config: &HuobiConfig) -> Result<AccountTypeMap> {
    if let Some(path) = &config.account_map_path {
        let map = AccountTypeMap::load(path)?;
        info!(count = map.len(), path = %path.display(), "Loaded cached account types");
        return Ok(map);
    }

    if config.has_credentials() {
        return fetch_account_types(config).await;
    }

    warn!("No account map or credentials configured, account types will be invalid");
    Ok(AccountTypeMap::new())
}

/// Fetches the caller's accounts and maps each account id to its type.
///
/// # Errors
///
/// Returns a [`HuobiError`](crate::HuobiError) if credentials are missing,
/// the HTTP request fails, or the API reports an error status.
pub async fn fetch_account_types(config: &HuobiConfig) -> Result<AccountTypeMap> {
    let (Some(api_key), Some(secret_key)) = (&config.api_key, &config.secret_key) else {
        return Err(crate::HuobiError::Config(
            "HUOBI_API_KEY and HUOBI_SECRET_KEY are required to fetch accounts".to_string(),
        ));
    };

    let url = signed_url(
        &config.rest_url,
        ACCOUNTS_PATH,
        api_key,
        secret_key,
        &utc_timestamp(),
    )?;
    debug!(path = ACCOUNTS_PATH, "Requesting accounts");

    let response = reqwest::Client::new().get(url).send().await?;
    let response = response.error_for_status()?;
    let body: AccountsResponse = response.json().await?;

    let map = account_types_from_response(body)?;
    info!(count = map.len(), "Fetched account types");
    Ok(map)
}

/// Converts an accounts response into a lookup map, surfacing API errors.
fn account_types_from_response(body: AccountsResponse) -> Result<AccountTypeMap> {
    if body.status != "ok" {
        return Err(crate::HuobiError::Api {
            code: body.err_code.unwrap_or_else(|| body.status.clone()),
            message: body.err_msg.unwrap_or_default(),
        });
    }

    Ok(AccountTypeMap::from_accounts(&body.data))
}
