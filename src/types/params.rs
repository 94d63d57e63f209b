// tool arguments, one struct per distinct parameter shape
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_depth_limit() -> u32 {
    100
}

fn default_history_limit() -> u32 {
    500
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Market,
    StopLoss,
    StopLossLimit,
    TakeProfit,
    TakeProfitLimit,
    LimitMaker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    Gtc,
    Ioc,
    Fok,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "LIMIT",
            OrderType::Market => "MARKET",
            OrderType::StopLoss => "STOP_LOSS",
            OrderType::StopLossLimit => "STOP_LOSS_LIMIT",
            OrderType::TakeProfit => "TAKE_PROFIT",
            OrderType::TakeProfitLimit => "TAKE_PROFIT_LIMIT",
            OrderType::LimitMaker => "LIMIT_MAKER",
        }
    }
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
        }
    }
}

/// Tools that take no arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NoParams {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SymbolParams {
    /// Trading pair symbol, e.g. `BTCUSDT`.
    pub symbol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OptionalSymbolParams {
    /// Trading pair symbol, e.g. `BTCUSDT`. Omit for all symbols.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OrderBookParams {
    /// Trading pair symbol, e.g. `BTCUSDT`.
    pub symbol: String,
    /// Depth limit (max 5000).
    #[serde(default = "default_depth_limit")]
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KlinesParams {
    /// Trading pair symbol, e.g. `BTCUSDT`.
    pub symbol: String,
    /// Kline interval, e.g. `1m`, `5m`, `1h`, `1d`.
    pub interval: String,
    /// Start time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Number of klines (max 1000).
    #[serde(default = "default_history_limit")]
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TradesParams {
    /// Trading pair symbol, e.g. `BTCUSDT`.
    pub symbol: String,
    /// Number of trades (max 1000).
    #[serde(default = "default_history_limit")]
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NewOrderParams {
    /// Trading pair symbol, e.g. `BTCUSDT`.
    pub symbol: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    /// Order quantity, required for most order types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Quote asset quantity, for MARKET orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_order_qty: Option<f64>,
    /// Limit price, required for LIMIT orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Required for LIMIT orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Trigger price, required for STOP_LOSS and TAKE_PROFIT orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<f64>,
    /// Visible quantity for iceberg orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iceberg_qty: Option<f64>,
    /// Custom client order id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_client_order_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TestOrderParams {
    /// Trading pair symbol, e.g. `BTCUSDT`.
    pub symbol: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Quote asset quantity, for MARKET orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_order_qty: Option<f64>,
    /// Limit price, required for LIMIT orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
}

/// Identifies a single order. One of the two ids must be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OrderLookupParams {
    /// Trading pair symbol, e.g. `BTCUSDT`.
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orig_client_order_id: Option<String>,
}

impl OrderLookupParams {
    pub fn has_order_ref(&self) -> bool {
        self.order_id.is_some() || self.orig_client_order_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AllOrdersParams {
    /// Trading pair symbol, e.g. `BTCUSDT`.
    pub symbol: String,
    /// Return orders with an id greater than or equal to this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    /// Start time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Number of orders (max 1000).
    #[serde(default = "default_history_limit")]
    pub limit: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BalanceParams {
    /// Asset, e.g. `BTC`. Omit for every non-zero balance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_fill_in_limits() {
        let book: OrderBookParams = serde_json::from_value(json!({"symbol": "BTCUSDT"})).unwrap();
        assert_eq!(book.limit, 100);

        let klines: KlinesParams =
            serde_json::from_value(json!({"symbol": "BTCUSDT", "interval": "1h"})).unwrap();
        assert_eq!(klines.limit, 500);
        assert_eq!(klines.start_time, None);
    }

    #[test]
    fn required_fields_are_enforced() {
        assert!(serde_json::from_value::<SymbolParams>(json!({})).is_err());
        assert!(
            serde_json::from_value::<NewOrderParams>(json!({"symbol": "BTCUSDT", "side": "BUY"}))
                .is_err()
        );
    }

    #[test]
    fn order_enums_use_exchange_spelling() {
        let order: NewOrderParams = serde_json::from_value(json!({
            "symbol": "BTCUSDT",
            "side": "SELL",
            "order_type": "STOP_LOSS_LIMIT",
            "time_in_force": "GTC",
        }))
        .unwrap();
        assert_eq!(order.side, OrderSide::Sell);
        assert_eq!(order.order_type.as_str(), "STOP_LOSS_LIMIT");
        assert_eq!(order.time_in_force, Some(TimeInForce::Gtc));
        assert!(
            serde_json::from_value::<OrderSide>(json!("buy")).is_err(),
            "lower case side is not an exchange value"
        );
    }
}
