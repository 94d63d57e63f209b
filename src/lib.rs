pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod server;
pub mod services;
pub mod types;

pub use handlers::ToolRegistry;
pub use services::BinanceClient;
