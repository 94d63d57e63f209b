use serde_json::Value;
use tracing::{debug, warn};

use super::api::SpotApi;
use crate::error::ExchangeError;
use crate::types::{KlinesParams, OptionalSymbolParams, OrderBookParams, SymbolParams, TradesParams};

pub struct MarketData<'a> {
    api: &'a dyn SpotApi,
}

impl<'a> MarketData<'a> {
    pub(crate) fn new(api: &'a dyn SpotApi) -> Self {
        Self { api }
    }

    pub async fn get_ticker(&self, params: &SymbolParams) -> Result<Value, ExchangeError> {
        let result = self
            .api
            .ticker_price(params)
            .await
            .inspect_err(|e| warn!(symbol = %params.symbol, error = %e, "failed to get ticker"))?;
        debug!(symbol = %params.symbol, "retrieved ticker");
        Ok(result)
    }

    pub async fn get_orderbook(&self, params: &OrderBookParams) -> Result<Value, ExchangeError> {
        let result = self
            .api
            .depth(params)
            .await
            .inspect_err(|e| warn!(symbol = %params.symbol, error = %e, "failed to get orderbook"))?;
        debug!(symbol = %params.symbol, limit = params.limit, "retrieved orderbook");
        Ok(result)
    }

    pub async fn get_klines(&self, params: &KlinesParams) -> Result<Value, ExchangeError> {
        let result = self
            .api
            .klines(params)
            .await
            .inspect_err(|e| warn!(symbol = %params.symbol, error = %e, "failed to get klines"))?;
        debug!(
            symbol = %params.symbol,
            count = result.as_array().map_or(0, Vec::len),
            "retrieved klines"
        );
        Ok(result)
    }

    pub async fn get_trades(&self, params: &TradesParams) -> Result<Value, ExchangeError> {
        let result = self
            .api
            .trades(params)
            .await
            .inspect_err(|e| warn!(symbol = %params.symbol, error = %e, "failed to get trades"))?;
        debug!(
            symbol = %params.symbol,
            count = result.as_array().map_or(0, Vec::len),
            "retrieved trades"
        );
        Ok(result)
    }

    pub async fn get_24hr_ticker(
        &self,
        params: &OptionalSymbolParams,
    ) -> Result<Value, ExchangeError> {
        let symbol = params.symbol.as_deref().unwrap_or("all symbols");
        let result = self
            .api
            .ticker_24hr(params)
            .await
            .inspect_err(|e| warn!(symbol, error = %e, "failed to get 24hr ticker"))?;
        debug!(symbol, "retrieved 24hr ticker");
        Ok(result)
    }

    pub async fn get_avg_price(&self, params: &SymbolParams) -> Result<Value, ExchangeError> {
        let result = self
            .api
            .avg_price(params)
            .await
            .inspect_err(|e| warn!(symbol = %params.symbol, error = %e, "failed to get average price"))?;
        debug!(symbol = %params.symbol, "retrieved average price");
        Ok(result)
    }

    pub async fn get_exchange_info(
        &self,
        params: &OptionalSymbolParams,
    ) -> Result<Value, ExchangeError> {
        let symbol = params.symbol.as_deref().unwrap_or("all symbols");
        let result = self
            .api
            .exchange_info(params)
            .await
            .inspect_err(|e| warn!(symbol, error = %e, "failed to get exchange info"))?;
        debug!(symbol, "retrieved exchange info");
        Ok(result)
    }
}
