// tracing setup

use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_FORMAT_VAR: &str = "BINANCE_MCP_LOG_FORMAT";

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber once per process.
///
/// `RUST_LOG` wins over `default_level`. Output always goes to stderr so the
/// stdio transport keeps stdout for protocol messages. Set
/// `BINANCE_MCP_LOG_FORMAT=json` for JSON lines.
pub fn init(default_level: &str) {
    TRACING_INIT.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let json = std::env::var(LOG_FORMAT_VAR)
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let result = if json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };

        if let Err(err) = result {
            eprintln!("tracing init skipped: {err}");
        }
    });
}
