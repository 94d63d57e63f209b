use std::process::ExitCode;

use binance_spot_mcp::{cli, logging};
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // .env may carry flag defaults such as BINANCE_MCP_CONFIG
    dotenvy::dotenv().ok();
    let args = cli::Cli::parse();
    logging::init(&args.log_level);

    match cli::run_cli(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
