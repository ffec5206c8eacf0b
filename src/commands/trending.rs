//! Trending coins command
//!
//! Lists the coins trending on CoinGecko from the `/search/trending`
//! endpoint, one line per coin.
//!
//! Usage: `coingecko-cli trending`

use crate::services::{ClientConfig, CoinGeckoClient};
use serde_json::Value;
use std::time::Duration;

pub fn run(timeout_secs: f64) {
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
        client.get_trending_coins().await
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

/// Render the `/search/trending` response. Each entry sits under
/// `coins[*].item`; absent names and symbols print as "N/A".
fn render(data: &Value) -> String {
    let mut out = String::new();
    out.push_str("--- Top Trending Coins ---\n");

    if let Some(coins) = data.get("coins").and_then(Value::as_array) {
        for coin in coins {
            let item = coin.get("item");
            let name = item
                .and_then(|i| i.get("name"))
                .and_then(Value::as_str)
                .unwrap_or("N/A");
            let symbol = item
                .and_then(|i| i.get("symbol"))
                .and_then(Value::as_str)
                .map(str::to_uppercase)
                .unwrap_or_else(|| "N/A".to_string());
            out.push_str(&format!("- {} ({})\n", name, symbol));
        }
    }

    out.push_str("----------------------------");
    out
}
