//! Current price lookup command
//!
//! Fetches the USD price and market cap for one or more coin ids from the
//! `/simple/price` endpoint and prints one block per coin.
//!
//! Usage: `coingecko-cli price bitcoin ethereum`

use crate::services::{ClientConfig, CoinGeckoClient};
use crate::utils::{capitalize, format_usd};
use serde_json::Value;
use std::time::Duration;

pub fn run(coin_ids: Vec<String>, timeout_secs: f64) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("❌ Error: failed to create async runtime: {}", e);
            std::process::exit(1);
        }
    };

    let result = runtime.block_on(async {
        let client = CoinGeckoClient::new(ClientConfig {
            timeout: Duration::from_secs_f64(timeout_secs),
            ..ClientConfig::default()
        })?;
        client.get_price(&coin_ids).await
    });

    match result {
        Ok(data) => {
            println!("{}", render(&data));
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Render the `/simple/price` response, one block per returned coin.
/// Absent or non-numeric fields print as "N/A".
fn render(data: &Value) -> String {
    let mut out = String::new();
    out.push_str("--- Crypto Prices ---\n");

    if let Some(coins) = data.as_object() {
        for (coin_id, entry) in coins {
            out.push_str(&format!("{}:\n", capitalize(coin_id)));
            out.push_str(&format!("  Price: {}\n", format_usd(entry.get("usd"))));
            out.push_str(&format!(
                "  Market Cap: {}\n",
                format_usd(entry.get("usd_market_cap"))
            ));
        }
    }

    out.push_str("---------------------");
    out
}
