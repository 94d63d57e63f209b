use serde_json::Value;
use tracing::{debug, info, warn};

use super::api::SpotApi;
use crate::error::ExchangeError;
use crate::types::{NewOrderParams, OrderLookupParams, TestOrderParams};

pub struct Trading<'a> {
    api: &'a dyn SpotApi,
}

impl<'a> Trading<'a> {
    pub(crate) fn new(api: &'a dyn SpotApi) -> Self {
        Self { api }
    }

    pub async fn create_order(&self, params: &NewOrderParams) -> Result<Value, ExchangeError> {
        let result = self
            .api
            .new_order(params)
            .await
            .inspect_err(|e| warn!(symbol = %params.symbol, error = %e, "failed to create order"))?;
        info!(
            symbol = %params.symbol,
            side = params.side.as_str(),
            order_type = params.order_type.as_str(),
            "order created"
        );
        Ok(result)
    }

    /// Exchange-side validation only; nothing reaches the matching engine.
    pub async fn test_order(&self, params: &TestOrderParams) -> Result<Value, ExchangeError> {
        let result = self
            .api
            .new_order_test(params)
            .await
            .inspect_err(|e| warn!(symbol = %params.symbol, error = %e, "test order rejected"))?;
        info!(
            symbol = %params.symbol,
            side = params.side.as_str(),
            order_type = params.order_type.as_str(),
            "test order validated"
        );
        Ok(result)
    }

    pub async fn cancel_order(&self, params: &OrderLookupParams) -> Result<Value, ExchangeError> {
        let result = self
            .api
            .cancel_order(params)
            .await
            .inspect_err(|e| warn!(symbol = %params.symbol, error = %e, "failed to cancel order"))?;
        info!(symbol = %params.symbol, order_id = ?params.order_id, "order cancelled");
        Ok(result)
    }

    pub async fn get_order(&self, params: &OrderLookupParams) -> Result<Value, ExchangeError> {
        let result = self
            .api
            .get_order(params)
            .await
            .inspect_err(|e| warn!(symbol = %params.symbol, error = %e, "failed to get order"))?;
        debug!(symbol = %params.symbol, order_id = ?params.order_id, "retrieved order status");
        Ok(result)
    }
}
