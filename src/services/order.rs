use serde_json::Value;
use tracing::{debug, info, warn};

use super::api::SpotApi;
use crate::error::ExchangeError;
use crate::types::{AllOrdersParams, OptionalSymbolParams, SymbolParams};

pub struct OrderManagement<'a> {
    api: &'a dyn SpotApi,
}

impl<'a> OrderManagement<'a> {
    pub(crate) fn new(api: &'a dyn SpotApi) -> Self {
        Self { api }
    }

    pub async fn get_open_orders(
        &self,
        params: &OptionalSymbolParams,
    ) -> Result<Value, ExchangeError> {
        let symbol = params.symbol.as_deref().unwrap_or("all symbols");
        let result = self
            .api
            .open_orders(params)
            .await
            .inspect_err(|e| warn!(symbol, error = %e, "failed to get open orders"))?;
        debug!(
            symbol,
            count = result.as_array().map_or(0, Vec::len),
            "retrieved open orders"
        );
        Ok(result)
    }

    pub async fn get_all_orders(&self, params: &AllOrdersParams) -> Result<Value, ExchangeError> {
        let result = self
            .api
            .all_orders(params)
            .await
            .inspect_err(|e| warn!(symbol = %params.symbol, error = %e, "failed to get all orders"))?;
        debug!(
            symbol = %params.symbol,
            count = result.as_array().map_or(0, Vec::len),
            "retrieved orders"
        );
        Ok(result)
    }

    pub async fn cancel_all_orders(&self, params: &SymbolParams) -> Result<Value, ExchangeError> {
        let result = self
            .api
            .cancel_open_orders(params)
            .await
            .inspect_err(|e| warn!(symbol = %params.symbol, error = %e, "failed to cancel all orders"))?;
        info!(symbol = %params.symbol, "cancelled all open orders");
        Ok(result)
    }

    pub async fn cancel_open_orders(&self, params: &SymbolParams) -> Result<Value, ExchangeError> {
        self.cancel_all_orders(params).await
    }
}
