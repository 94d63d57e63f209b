// export modules
pub mod account;
pub mod api;
pub mod client;
pub mod market;
pub mod order;
pub mod rest;
pub mod trading;

pub use account::Account;
pub use api::{ApiResult, SpotApi};
pub use client::BinanceClient;
pub use market::MarketData;
pub use order::OrderManagement;
pub use rest::SpotRestClient;
pub use trading::Trading;
