//! Runtime settings, taken from `HUOBI_*` environment variables.
//!
//! Nothing here is mandatory. With no variables set the crate talks to the
//! main `api.huobi.pro` host. Without keys or a cached account map there is
//! no account fetch, and every order maps to an `invalid` account type.
//!
//! - `HUOBI_REST_URL`: REST host, e.g. `https://api-aws.huobi.pro` for the
//!   AWS-hosted endpoint.
//! - `HUOBI_API_KEY`, `HUOBI_SECRET_KEY`: the access key pair used to sign
//!   `GET /v1/account/accounts`.
//! - `HUOBI_ACCOUNT_MAP`: JSON file of account id → account type, read
//!   instead of calling the REST API.

use std::path::PathBuf;

const DEFAULT_REST_URL: &str = "https://api.huobi.pro";

#[derive(Debug)]
pub struct AppConfig {
    pub huobi: HuobiConfig,
}

/// Where to reach Huobi and how to identify the account.
#[derive(Debug)]
pub struct HuobiConfig {
    pub rest_url: String,
    pub api_key: Option<String>,
    pub secret_key: Option<String>,
    pub account_map_path: Option<PathBuf>,
}

impl HuobiConfig {
    /// Whether a signed account fetch is possible.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() && self.secret_key.is_some()
    }
}

/// Reads the `HUOBI_*` variables into an [`AppConfig`].
///
/// A key without its secret (or the reverse) cannot sign anything, so a
/// half-configured pair is refused rather than silently ignored. Set-but-empty
/// variables are the same as unset ones.
///
/// # Errors
///
/// Returns [`HuobiError::Config`](crate::HuobiError::Config) naming the
/// missing half of the access key pair.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let rest_url = non_empty_var("HUOBI_REST_URL").unwrap_or_else(|| DEFAULT_REST_URL.to_string());

    let api_key = non_empty_var("HUOBI_API_KEY");
    let secret_key = non_empty_var("HUOBI_SECRET_KEY");

    match (&api_key, &secret_key) {
        (Some(_), None) => {
            return Err(crate::HuobiError::Config(
                "HUOBI_API_KEY is set but HUOBI_SECRET_KEY is missing".to_string(),
            ));
        }
        (None, Some(_)) => {
            return Err(crate::HuobiError::Config(
                "HUOBI_SECRET_KEY is set but HUOBI_API_KEY is missing".to_string(),
            ));
        }
        _ => {}
    }

    Ok(AppConfig {
        huobi: HuobiConfig {
            rest_url,
            api_key,
            secret_key,
            account_map_path: non_empty_var("HUOBI_ACCOUNT_MAP").map(PathBuf::from),
        },
    })
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
