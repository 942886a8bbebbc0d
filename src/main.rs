pub mod auth;
pub mod config;
pub mod flights;
pub mod logging;
pub mod requests;

use clap::Parser;

/// Connectivity check against the Aviationstack flight data API.
#[derive(Parser)]
#[command(name = "flight_check", version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logging::setup_logger(cli.verbose);

    if let Err(e) = flights::check().await {
        eprintln!("Error: {}", e);
    }
}
