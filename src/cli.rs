use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use crate::{
    config::{self, Environment, ToolsConfig},
    handlers::ToolRegistry,
    server::{self, AppState},
    services::BinanceClient,
    types::ToolCategory,
};

/// Binance's default `recvWindow`.
const MAX_CLOCK_SKEW_MS: i64 = 5_000;

#[derive(Parser, Debug)]
#[command(name = "binance-spot-mcp", version)]
#[command(about = "Binance spot REST API exposed as MCP tools")]
pub struct Cli {
    /// Tool configuration document
    #[arg(long, env = "BINANCE_MCP_CONFIG", default_value = config::loader::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Start the MCP server (default)
    Serve(ServeArgs),
    /// Load and validate the configuration, then print the resolved tools
    Check,
    /// Print the tools each category allows
    Tools,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve(ServeArgs::default())
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ServeArgs {
    #[arg(long, value_enum, default_value_t = Transport::Http)]
    pub transport: Transport,

    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    #[arg(long, default_value_t = 8000)]
    pub port: u16,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            transport: Transport::Http,
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8000,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Http,
    Stdio,
}

pub async fn run_cli(cli: Cli) -> Result<()> {
    match cli.command.clone().unwrap_or_default() {
        Commands::Serve(args) => serve(&cli.config, args).await,
        Commands::Check => check(&cli.config),
        Commands::Tools => {
            print_allow_lists();
            Ok(())
        }
    }
}

/// Startup order: environment, configuration, exchange client, registry,
/// then the transport. Any failure aborts before anything is served.
async fn serve(config_path: &Path, args: ServeArgs) -> Result<()> {
    let env = Environment::load().context("failed to load environment")?;
    info!(credentials = ?env.credentials, "environment loaded");

    let tools = load_config(config_path)?;
    let resolved = tools.resolve();

    let client = BinanceClient::connect(&env.credentials)
        .context("failed to create Binance client")?;
    client
        .ping()
        .await
        .context("Binance API connectivity check failed")?;
    match client.clock_skew_ms().await {
        Ok(skew) if skew.abs() > MAX_CLOCK_SKEW_MS => {
            warn!(skew_ms = skew, "local clock is out of sync with Binance; signed requests may be rejected")
        }
        Ok(skew) => info!(skew_ms = skew, "clock in sync with Binance"),
        Err(e) => warn!(error = %e, "could not read Binance server time"),
    }

    let registry = Arc::new(ToolRegistry::new(Arc::new(client), &resolved));
    if registry.is_empty() {
        warn!("no tools enabled; the server will expose an empty tool list");
    }

    match args.transport {
        Transport::Http => {
            let addr = SocketAddr::new(args.host, args.port);
            let state = AppState::new(registry, env.token);
            server::serve_http(state, addr)
                .await
                .context("http server failed")
        }
        Transport::Stdio => server::serve_stdio(registry)
            .await
            .context("stdio server failed"),
    }
}

fn check(config_path: &Path) -> Result<()> {
    let tools = load_config(config_path)?;
    let resolved = tools.resolve();

    println!("Configuration {} is valid", config_path.display());
    for category in &tools.categories {
        let state = if category.enabled { "enabled" } else { "disabled" };
        let names: Vec<&str> = category.tools.iter().map(|t| t.as_str()).collect();
        println!("  {:<8} {:<9} [{}]", category.category, state, names.join(", "));
    }
    for ignored in &tools.ignored_categories {
        println!("  {:<8} ignored (unknown category)", ignored);
    }
    println!("{} tools would be registered", resolved.len());
    Ok(())
}

fn print_allow_lists() {
    for category in ToolCategory::ALL {
        println!("{}:", category);
        for tool in category.allowed() {
            println!("  {:<20} {}", tool.as_str(), tool.description());
        }
    }
}

fn load_config(path: &Path) -> Result<ToolsConfig> {
    config::load_tools_config(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}
