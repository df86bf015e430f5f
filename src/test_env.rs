//! Process environment helpers shared by the config and credential tests.

use std::sync::Mutex;

/// Serializes every test that reads or writes `HUOBI_*` variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets (`Some`) or removes (`None`) each variable, runs `f`, then puts the
/// previous values back. Variables `f` changes must be listed in `vars` to
/// be restored.
pub(crate) fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let originals: Vec<(&str, Option<String>)> = vars
        .iter()
        .map(|(k, _)| (*k, std::env::var(k).ok()))
        .collect();

    for (k, v) in vars {
        // SAFETY: env access is serialized by ENV_LOCK.
        unsafe {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
    }

    f();

    for (k, original) in originals {
        // SAFETY: still holding ENV_LOCK.
        unsafe {
            match original {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
    }
}
