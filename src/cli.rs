use clap::{Parser, Subcommand};

use crate::commands;
use crate::constants::{DEFAULT_EXCHANGES_PAGE, DEFAULT_EXCHANGES_PER_PAGE, DEFAULT_TIMEOUT_SECS};

#[derive(Parser)]
#[command(name = "coingecko-cli")]
#[command(about = "CoinGecko market data CLI", long_about = None)]
pub struct Cli {
    /// HTTP timeout in seconds for a single API request
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: f64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ping the CoinGecko API
    Ping,
    /// Get current price(s) for coin id(s)
    Price {
        /// One or more CoinGecko coin ids (e.g. bitcoin ethereum)
        #[arg(required = true)]
        coin_ids: Vec<String>,
    },
    /// Show trending coins
    Trending,
    /// List exchanges (supports pagination)
    Exchanges {
        /// Page number (1-indexed)
        #[arg(long, default_value_t = DEFAULT_EXCHANGES_PAGE)]
        page: u32,
        /// Number of items per page
        #[arg(long, default_value_t = DEFAULT_EXCHANGES_PER_PAGE)]
        per_page: u32,
    },
}

pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ping => {
            commands::ping::run(cli.timeout);
        }
        Commands::Price { coin_ids } => {
            commands::price::run(coin_ids, cli.timeout);
        }
        Commands::Trending => {
            commands::trending::run(cli.timeout);
        }
        Commands::Exchanges { page, per_page } => {
            commands::exchanges::run(per_page, page, cli.timeout);
        }
    }
}
