//! API availability check command
//!
//! Usage: `coingecko-cli ping`

use crate::services::{ClientConfig, CoinGeckoClient};
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
        client.ping().await
    });

    match result {
        Ok(data) => {
            println!("✅ CoinGecko API Status: OK");
            println!("{}", data);
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}
