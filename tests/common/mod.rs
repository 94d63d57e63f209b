#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use binance_spot_mcp::{
    config::ResolvedToolSet,
    error::ExchangeError,
    handlers::ToolRegistry,
    services::{ApiResult, BinanceClient, SpotApi},
    types::*,
};
use serde::Serialize;
use serde_json::{Value, json};

/// One exchange operation as seen by the stand-in exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub op: &'static str,
    pub params: Value,
}

/// Stand-in exchange that records every operation and answers with canned
/// bodies. Unconfigured operations answer `{"op": <name>}`.
#[derive(Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<Call>>,
    responses: Mutex<HashMap<&'static str, Value>>,
    rejection: Mutex<Option<(u16, i64, String)>>,
}

impl RecordingApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, op: &'static str, body: Value) {
        self.responses.lock().unwrap().insert(op, body);
    }

    /// Every following call fails the way the exchange rejects requests.
    pub fn reject_with(&self, status: u16, code: i64, msg: &str) {
        *self.rejection.lock().unwrap() = Some((status, code, msg.to_string()));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record<P: Serialize>(&self, op: &'static str, params: Option<&P>) -> ApiResult {
        let params = params
            .map(|p| serde_json::to_value(p).unwrap())
            .unwrap_or(Value::Null);
        self.calls.lock().unwrap().push(Call { op, params });

        if let Some((status, code, msg)) = self.rejection.lock().unwrap().clone() {
            return Err(ExchangeError::Api { status, code, msg });
        }
        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(op)
            .cloned()
            .unwrap_or_else(|| json!({ "op": op })))
    }
}

#[async_trait]
impl SpotApi for RecordingApi {
    async fn ping(&self) -> ApiResult {
        self.record::<()>("ping", None)
    }

    async fn server_time(&self) -> ApiResult {
        self.record::<()>("server_time", None)
    }

    async fn ticker_price(&self, params: &SymbolParams) -> ApiResult {
        self.record("ticker_price", Some(params))
    }

    async fn depth(&self, params: &OrderBookParams) -> ApiResult {
        self.record("depth", Some(params))
    }

    async fn klines(&self, params: &KlinesParams) -> ApiResult {
        self.record("klines", Some(params))
    }

    async fn trades(&self, params: &TradesParams) -> ApiResult {
        self.record("trades", Some(params))
    }

    async fn ticker_24hr(&self, params: &OptionalSymbolParams) -> ApiResult {
        self.record("ticker_24hr", Some(params))
    }

    async fn avg_price(&self, params: &SymbolParams) -> ApiResult {
        self.record("avg_price", Some(params))
    }

    async fn exchange_info(&self, params: &OptionalSymbolParams) -> ApiResult {
        self.record("exchange_info", Some(params))
    }

    async fn new_order(&self, params: &NewOrderParams) -> ApiResult {
        self.record("new_order", Some(params))
    }

    async fn new_order_test(&self, params: &TestOrderParams) -> ApiResult {
        self.record("new_order_test", Some(params))
    }

    async fn cancel_order(&self, params: &OrderLookupParams) -> ApiResult {
        self.record("cancel_order", Some(params))
    }

    async fn get_order(&self, params: &OrderLookupParams) -> ApiResult {
        self.record("get_order", Some(params))
    }

    async fn account(&self) -> ApiResult {
        self.record::<()>("account", None)
    }

    async fn account_status(&self) -> ApiResult {
        self.record::<()>("account_status", None)
    }

    async fn open_orders(&self, params: &OptionalSymbolParams) -> ApiResult {
        self.record("open_orders", Some(params))
    }

    async fn all_orders(&self, params: &AllOrdersParams) -> ApiResult {
        self.record("all_orders", Some(params))
    }

    async fn cancel_open_orders(&self, params: &SymbolParams) -> ApiResult {
        self.record("cancel_open_orders", Some(params))
    }
}

pub fn client(api: &Arc<RecordingApi>) -> Arc<BinanceClient> {
    Arc::new(BinanceClient::with_api(api.clone()))
}

pub fn registry(api: &Arc<RecordingApi>, tools: impl IntoIterator<Item = ToolName>) -> ToolRegistry {
    let resolved: ResolvedToolSet = tools.into_iter().collect();
    ToolRegistry::new(client(api), &resolved)
}

pub fn full_registry(api: &Arc<RecordingApi>) -> ToolRegistry {
    registry(api, ToolName::all())
}

/// Writes `contents` to a fresh file under the temp dir.
pub fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("binance-spot-mcp-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
