mod core;
mod rpc;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "sabi", about = "Terminal client for a wallet RPC daemon")]
struct Args {
    /// Daemon RPC endpoint, e.g. http://127.0.0.1:37128
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Wallet to select at startup
    #[arg(short, long)]
    wallet: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to sabi.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("sabi.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match crate::core::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    let resolved = crate::core::config::resolve(
        &config,
        args.endpoint.as_deref(),
        args.wallet.as_deref(),
    );

    log::info!("sabi starting up against {}", resolved.endpoint);

    tui::run(resolved)
}
