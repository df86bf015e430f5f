use std::io::BufRead;

use huobi_ws::HuobiError;
use huobi_ws::config::fetch_config;
use huobi_ws::credentials::populate_env_from_keychain;
use huobi_ws::handler::{PushMessage, dispatch_message, pong_message};
use huobi_ws::rest::load_account_types;
use tracing::warn;

/// Replays decoded push messages from stdin, one JSON object per line.
///
/// An optional first argument names the requested symbol used to normalize
/// order lists that omit it.
fn main() -> Result<(), HuobiError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    populate_env_from_keychain();
    let app_config = fetch_config()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let accounts = runtime.block_on(load_account_types(&app_config.huobi))?;

    let symbol = std::env::args().nth(1);

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match dispatch_message(&line, &accounts, symbol.as_deref()) {
            Ok(PushMessage::OrderList(response)) => println!("{response}"),
            Ok(PushMessage::OrderDetail(response)) => println!("{response}"),
            Ok(PushMessage::Ping(ts)) => println!("{}", pong_message(ts)?),
            Ok(_) => {}
            Err(e) => warn!("Skipping message: {e}"),
        }
    }

    Ok(())
}
