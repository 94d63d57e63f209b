use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use super::account::Account;
use super::api::SpotApi;
use super::market::MarketData;
use super::order::OrderManagement;
use super::rest::SpotRestClient;
use super::trading::Trading;
use crate::config::Credentials;
use crate::error::ExchangeError;
use crate::types::ServerTime;

/// The one long-lived exchange handle.
///
/// Built once at startup and shared read-only by every tool handler.
#[derive(Clone)]
pub struct BinanceClient {
    api: Arc<dyn SpotApi>,
}

impl BinanceClient {
    pub fn connect(credentials: &Credentials) -> Result<Self, ExchangeError> {
        let rest = SpotRestClient::new(credentials)?;
        Ok(Self::with_api(Arc::new(rest)))
    }

    /// Wraps any `SpotApi`, e.g. a stand-in exchange in tests.
    pub fn with_api(api: Arc<dyn SpotApi>) -> Self {
        Self { api }
    }

    pub async fn ping(&self) -> Result<(), ExchangeError> {
        match self.api.ping().await {
            Ok(_) => {
                info!("binance api ping successful");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "binance api ping failed");
                Err(e)
            }
        }
    }

    pub async fn server_time(&self) -> Result<i64, ExchangeError> {
        let body = self.api.server_time().await?;
        let time: ServerTime = serde_json::from_value(body)?;
        Ok(time.server_time)
    }

    /// Local clock minus exchange clock, in milliseconds. Signed requests are
    /// rejected once this drifts past the exchange's receive window.
    pub async fn clock_skew_ms(&self) -> Result<i64, ExchangeError> {
        let server = self.server_time().await?;
        Ok(Utc::now().timestamp_millis() - server)
    }

    pub fn market(&self) -> MarketData<'_> {
        MarketData::new(self.api.as_ref())
    }

    pub fn trading(&self) -> Trading<'_> {
        Trading::new(self.api.as_ref())
    }

    pub fn account(&self) -> Account<'_> {
        Account::new(self.api.as_ref())
    }

    pub fn order(&self) -> OrderManagement<'_> {
        OrderManagement::new(self.api.as_ref())
    }
}
