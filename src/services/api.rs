use async_trait::async_trait;
use serde_json::Value;

use crate::error::ExchangeError;
use crate::types::{
    AllOrdersParams, KlinesParams, NewOrderParams, OptionalSymbolParams, OrderBookParams,
    OrderLookupParams, SymbolParams, TestOrderParams, TradesParams,
};

pub type ApiResult = Result<Value, ExchangeError>;

/// One method per exchange REST operation.
///
/// Implementations do a single request and hand back the raw JSON body.
/// `SpotRestClient` is the real one; tests substitute a recording stand-in.
#[async_trait]
pub trait SpotApi: Send + Sync {
    async fn ping(&self) -> ApiResult;

    async fn server_time(&self) -> ApiResult;

    // market data
    async fn ticker_price(&self, params: &SymbolParams) -> ApiResult;

    async fn depth(&self, params: &OrderBookParams) -> ApiResult;

    async fn klines(&self, params: &KlinesParams) -> ApiResult;

    async fn trades(&self, params: &TradesParams) -> ApiResult;

    async fn ticker_24hr(&self, params: &OptionalSymbolParams) -> ApiResult;

    async fn avg_price(&self, params: &SymbolParams) -> ApiResult;

    async fn exchange_info(&self, params: &OptionalSymbolParams) -> ApiResult;

    // trading
    async fn new_order(&self, params: &NewOrderParams) -> ApiResult;

    async fn new_order_test(&self, params: &TestOrderParams) -> ApiResult;

    async fn cancel_order(&self, params: &OrderLookupParams) -> ApiResult;

    async fn get_order(&self, params: &OrderLookupParams) -> ApiResult;

    // account
    async fn account(&self) -> ApiResult;

    async fn account_status(&self) -> ApiResult;

    // order management
    async fn open_orders(&self, params: &OptionalSymbolParams) -> ApiResult;

    async fn all_orders(&self, params: &AllOrdersParams) -> ApiResult;

    async fn cancel_open_orders(&self, params: &SymbolParams) -> ApiResult;
}
