pub mod coingecko;

pub use coingecko::{ClientConfig, CoinGeckoClient};
