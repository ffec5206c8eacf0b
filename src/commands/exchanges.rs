//! Exchange listing command
//!
//! Fetches one page of the `/exchanges` listing and prints rank and name
//! per exchange.
//!
//! Usage: `coingecko-cli exchanges --page 2 --per-page 50`

use crate::services::{ClientConfig, CoinGeckoClient};
use serde_json::Value;
use std::time::Duration;

pub fn run(per_page: u32, page: u32, timeout_secs: f64) {
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
        client.get_exchanges(per_page, page).await
    });

    match result {
        Ok(data) => {
            println!("{}", render(per_page, page, &data));
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Render the `/exchanges` response. The endpoint normally returns an
/// array; any other shape is printed raw rather than rejected.
fn render(per_page: u32, page: u32, data: &Value) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "--- Top {} Exchanges (Page {}) ---\n",
        per_page, page
    ));

    match data.as_array() {
        Some(exchanges) => {
            for exchange in exchanges {
                let rank = match exchange.get("trust_score_rank").and_then(Value::as_i64) {
                    Some(r) => r.to_string(),
                    None => "N/A".to_string(),
                };
                let name = exchange
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or("N/A");
                out.push_str(&format!("#{}: {}\n", rank, name));
            }
        }
        None => {
            out.push_str(&format!("{}\n", data));
        }
    }

    out.push_str("---------------------------------");
    out
}
