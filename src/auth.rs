//! Huobi REST API request signing (signature version 2).
//!
//! Private endpoints take four query parameters (`AccessKeyId`,
//! `SignatureMethod`, `SignatureVersion`, `Timestamp`) plus a `Signature`
//! computed over the method, host, path, and the form-encoded parameters in
//! ASCII order.

use base64::prelude::*;
use hmac::{Hmac, Mac};
use reqwest::Url;
use sha2::Sha256;

use crate::Result;

const SIGNATURE_METHOD: &str = "HmacSHA256";
const SIGNATURE_VERSION: &str = "2";

/// Returns the current UTC time in the `Timestamp` parameter format.
#[must_use]
pub fn utc_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Builds a signed `GET` URL for a private REST endpoint.
///
/// # Errors
///
/// Returns [`HuobiError::Config`](crate::HuobiError::Config) if `base_url`
/// cannot be parsed or has no host.
pub fn signed_url(
    base_url: &str,
    path: &str,
    api_key: &str,
    secret_key: &str,
    timestamp: &str,
) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .and_then(|base| base.join(path))
        .map_err(|e| crate::HuobiError::Config(format!("invalid REST url {base_url}: {e}")))?;

    // Already in ASCII order.
    url.query_pairs_mut()
        .append_pair("AccessKeyId", api_key)
        .append_pair("SignatureMethod", SIGNATURE_METHOD)
        .append_pair("SignatureVersion", SIGNATURE_VERSION)
        .append_pair("Timestamp", timestamp);

    let host = url
        .host_str()
        .ok_or_else(|| crate::HuobiError::Config(format!("REST url {base_url} has no host")))?
        .to_ascii_lowercase();
    let payload = format!(
        "GET\n{host}\n{}\n{}",
        url.path(),
        url.query().unwrap_or_default()
    );
    let signature = sign(secret_key, &payload)?;

    url.query_pairs_mut().append_pair("Signature", &signature);
    Ok(url)
}

/// Computes `Base64(HMAC-SHA256(secret_key, payload))`.
fn sign(secret_key: &str, payload: &str) -> Result<String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret_key.as_bytes())
        .map_err(|e| crate::HuobiError::Config(format!("invalid HMAC key: {e}")))?;
    mac.update(payload.as_bytes());
    let result = mac.finalize().into_bytes();

    Ok(BASE64_STANDARD.encode(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    const API_KEY: &str = "e2xxxxxx-99xxxxxx-84xxxxxx-7xxxx";
    const SECRET_KEY: &str = "b0xxxxxx-c6xxxxxx-94xxxxxx-dxxxx";

    #[test]
    fn sign_matches_reference_vector() {
        let payload = "GET\napi.huobi.pro\n/v1/account/accounts\n\
            AccessKeyId=e2xxxxxx-99xxxxxx-84xxxxxx-7xxxx&SignatureMethod=HmacSHA256\
            &SignatureVersion=2&Timestamp=2017-05-11T15%3A19%3A30";

        assert_eq!(
            sign(SECRET_KEY, payload).unwrap(),
            "mo1l8CzSb+GRNh/gw7e6jgbfixbzfyo4ZuUuSVzvcDM="
        );
    }

    #[test]
    fn signed_url_appends_signature_last() {
        let url = signed_url(
            "https://api.huobi.pro",
            "/v1/account/accounts",
            API_KEY,
            SECRET_KEY,
            "2017-05-11T15:19:30",
        )
        .unwrap();

        assert_eq!(url.path(), "/v1/account/accounts");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "AccessKeyId",
                "SignatureMethod",
                "SignatureVersion",
                "Timestamp",
                "Signature"
            ]
        );
        assert_eq!(pairs[3].1, "2017-05-11T15:19:30");
        assert_eq!(pairs[4].1, "mo1l8CzSb+GRNh/gw7e6jgbfixbzfyo4ZuUuSVzvcDM=");
    }

    #[test]
    fn signed_url_rejects_bad_base() {
        let result = signed_url("not a url", "/v1/account/accounts", API_KEY, SECRET_KEY, "t");
        assert!(result.is_err());
    }

    #[test]
    fn timestamp_has_second_precision() {
        let ts = utc_timestamp();
        assert_eq!(ts.len(), "2017-05-11T15:19:30".len());
        assert_eq!(&ts[10..11], "T");
    }
}
