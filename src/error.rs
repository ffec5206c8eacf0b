use thiserror::Error as ThisError;

/// One variant per failure kind a client call can produce.
///
/// `Validation` is raised before any request is sent; the other three
/// classify what came back (or didn't) from the network.
#[derive(ThisError, Debug)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("CoinGecko /{endpoint} returned status {status}")]
    HttpStatus { endpoint: &'static str, status: u16 },

    #[error("CoinGecko /{endpoint} returned invalid JSON: {detail}")]
    Decode { endpoint: &'static str, detail: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;
