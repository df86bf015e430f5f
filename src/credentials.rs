//! Huobi access keys kept in the OS keychain.
//!
//! The binary calls [`populate_env_from_keychain`] before reading the
//! config. It only fills gaps: a key exported in the shell always beats the
//! stored one, so a one-off `HUOBI_API_KEY=.. huobi-ws` run can use another
//! account without touching the keychain.

use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Keychain service the entries are filed under.
const SERVICE: &str = "huobi-ws";

/// The two halves of a Huobi access key pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialKey {
    HuobiApiKey,
    HuobiSecretKey,
}

impl CredentialKey {
    pub const ALL: [CredentialKey; 2] = [Self::HuobiApiKey, Self::HuobiSecretKey];

    /// Account name of the keychain entry.
    pub fn keyring_id(self) -> &'static str {
        match self {
            Self::HuobiApiKey => "huobi_api_key",
            Self::HuobiSecretKey => "huobi_secret_key",
        }
    }

    /// Variable [`crate::config::fetch_config`] reads this key from.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::HuobiApiKey => "HUOBI_API_KEY",
            Self::HuobiSecretKey => "HUOBI_SECRET_KEY",
        }
    }
}

/// Reads one key from the keychain. A missing entry yields `None` quietly;
/// any other keychain failure is logged and also yields `None`.
pub fn load(key: CredentialKey) -> Option<Zeroizing<String>> {
    let entry = keyring::Entry::new(SERVICE, key.keyring_id())
        .inspect_err(|e| warn!(key = key.keyring_id(), error = %e, "failed to open keychain entry"))
        .ok()?;
    match entry.get_password() {
        Ok(password) => Some(Zeroizing::new(password)),
        Err(keyring::Error::NoEntry) => None,
        Err(e) => {
            warn!(key = key.keyring_id(), error = %e, "failed to read keychain entry");
            None
        }
    }
}

/// Exports stored keys for every `HUOBI_*` key variable that is unset or
/// empty.
///
/// Must run before any other thread reads the environment.
pub fn populate_env_from_keychain() {
    let filled = fill_unset_env(load);
    if filled > 0 {
        debug!(count = filled, "exported keychain credentials");
    }
}

/// Asks `source` only for keys the environment lacks and exports what it
/// returns. Returns how many variables were set.
fn fill_unset_env<F>(mut source: F) -> usize
where
    F: FnMut(CredentialKey) -> Option<Zeroizing<String>>,
{
    let mut filled = 0;
    for key in CredentialKey::ALL {
        if std::env::var(key.env_var()).is_ok_and(|v| !v.is_empty()) {
            continue;
        }
        let Some(value) = source(key) else {
            continue;
        };
        debug!(key = key.env_var(), "loaded credential from keychain");
        // SAFETY: called from main before the tokio runtime exists.
        unsafe {
            std::env::set_var(key.env_var(), value.as_str());
        }
        filled += 1;
    }
    filled
}
