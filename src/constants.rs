//! Fixed API endpoints and client defaults.

/// Base URL for the CoinGecko public API (v3)
pub const COINGECKO_BASE: &str = "https://api.coingecko.com/api/v3";

/// Default number of seconds to wait for an HTTP response
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Default page number for the exchanges listing (1-indexed)
pub const DEFAULT_EXCHANGES_PAGE: u32 = 1;

/// Default number of exchanges per page
pub const DEFAULT_EXCHANGES_PER_PAGE: u32 = 100;
