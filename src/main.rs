mod cli;
mod commands;
mod constants;
mod error;
mod services;
mod utils;

use tracing_subscriber::EnvFilter;

fn main() {
    // Quiet unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    cli::run();
}
