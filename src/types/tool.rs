// tool categories, tool names and the per-category allow-lists
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Market,
    Trading,
    Account,
    Order,
}

impl ToolCategory {
    /// Registration order.
    pub const ALL: [ToolCategory; 4] = [
        ToolCategory::Market,
        ToolCategory::Trading,
        ToolCategory::Account,
        ToolCategory::Order,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Market => "market",
            ToolCategory::Trading => "trading",
            ToolCategory::Account => "account",
            ToolCategory::Order => "order",
        }
    }

    /// The closed set of tool names this category may enable.
    pub fn allowed(&self) -> &'static [ToolName] {
        match self {
            ToolCategory::Market => &MARKET_TOOLS,
            ToolCategory::Trading => &TRADING_TOOLS,
            ToolCategory::Account => &ACCOUNT_TOOLS,
            ToolCategory::Order => &ORDER_TOOLS,
        }
    }

    /// Looks a name up in this category's allow-list only.
    pub fn tool(&self, name: &str) -> Option<ToolName> {
        self.allowed().iter().copied().find(|tool| tool.as_str() == name)
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ToolCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown tool category: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    // market
    GetSymbolTicker,
    GetOrderbook,
    GetKlines,
    GetTrades,
    #[serde(rename = "get_24hr_ticker")]
    Get24hrTicker,
    GetAvgPrice,
    GetExchangeInfo,
    // trading
    CreateOrder,
    TestOrder,
    CancelOrder,
    GetOrder,
    // account
    GetAccountInfo,
    GetBalance,
    GetAccountStatus,
    // order
    GetOpenOrders,
    GetAllOrders,
    CancelAllOrders,
    CancelOpenOrders,
}

const MARKET_TOOLS: [ToolName; 7] = [
    ToolName::GetSymbolTicker,
    ToolName::GetOrderbook,
    ToolName::GetKlines,
    ToolName::GetTrades,
    ToolName::Get24hrTicker,
    ToolName::GetAvgPrice,
    ToolName::GetExchangeInfo,
];

const TRADING_TOOLS: [ToolName; 4] = [
    ToolName::CreateOrder,
    ToolName::TestOrder,
    ToolName::CancelOrder,
    ToolName::GetOrder,
];

const ACCOUNT_TOOLS: [ToolName; 3] = [
    ToolName::GetAccountInfo,
    ToolName::GetBalance,
    ToolName::GetAccountStatus,
];

const ORDER_TOOLS: [ToolName; 4] = [
    ToolName::GetOpenOrders,
    ToolName::GetAllOrders,
    ToolName::CancelAllOrders,
    ToolName::CancelOpenOrders,
];

impl ToolName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GetSymbolTicker => "get_symbol_ticker",
            ToolName::GetOrderbook => "get_orderbook",
            ToolName::GetKlines => "get_klines",
            ToolName::GetTrades => "get_trades",
            ToolName::Get24hrTicker => "get_24hr_ticker",
            ToolName::GetAvgPrice => "get_avg_price",
            ToolName::GetExchangeInfo => "get_exchange_info",
            ToolName::CreateOrder => "create_order",
            ToolName::TestOrder => "test_order",
            ToolName::CancelOrder => "cancel_order",
            ToolName::GetOrder => "get_order",
            ToolName::GetAccountInfo => "get_account_info",
            ToolName::GetBalance => "get_balance",
            ToolName::GetAccountStatus => "get_account_status",
            ToolName::GetOpenOrders => "get_open_orders",
            ToolName::GetAllOrders => "get_all_orders",
            ToolName::CancelAllOrders => "cancel_all_orders",
            ToolName::CancelOpenOrders => "cancel_open_orders",
        }
    }

    pub fn category(&self) -> ToolCategory {
        match self {
            ToolName::GetSymbolTicker
            | ToolName::GetOrderbook
            | ToolName::GetKlines
            | ToolName::GetTrades
            | ToolName::Get24hrTicker
            | ToolName::GetAvgPrice
            | ToolName::GetExchangeInfo => ToolCategory::Market,
            ToolName::CreateOrder
            | ToolName::TestOrder
            | ToolName::CancelOrder
            | ToolName::GetOrder => ToolCategory::Trading,
            ToolName::GetAccountInfo | ToolName::GetBalance | ToolName::GetAccountStatus => {
                ToolCategory::Account
            }
            ToolName::GetOpenOrders
            | ToolName::GetAllOrders
            | ToolName::CancelAllOrders
            | ToolName::CancelOpenOrders => ToolCategory::Order,
        }
    }

    /// Every known tool, grouped by category in registration order.
    pub fn all() -> impl Iterator<Item = ToolName> {
        ToolCategory::ALL
            .into_iter()
            .flat_map(|category| category.allowed().iter().copied())
    }

    /// Human readable summary published in `tools/list`.
    pub fn description(&self) -> &'static str {
        match self {
            ToolName::GetSymbolTicker => "Get the latest price ticker for a trading pair.",
            ToolName::GetOrderbook => "Get order book depth (bids and asks) for a trading pair.",
            ToolName::GetKlines => {
                "Get candlestick (kline) data: [openTime, open, high, low, close, volume, ...]."
            }
            ToolName::GetTrades => "Get recent trades for a trading pair.",
            ToolName::Get24hrTicker => {
                "Get 24hr price change statistics for one trading pair, or all pairs when no symbol is given."
            }
            ToolName::GetAvgPrice => "Get the current average price for a trading pair.",
            ToolName::GetExchangeInfo => {
                "Get exchange trading rules and symbol information, optionally for a single symbol."
            }
            ToolName::CreateOrder => "Place a new order.",
            ToolName::TestOrder => {
                "Validate a new order without sending it to the matching engine."
            }
            ToolName::CancelOrder => {
                "Cancel an active order by order_id or orig_client_order_id."
            }
            ToolName::GetOrder => {
                "Check an order's status by order_id or orig_client_order_id."
            }
            ToolName::GetAccountInfo => {
                "Get account information including balances and permissions."
            }
            ToolName::GetBalance => {
                "Get the balance of one asset, or all non-zero balances when no asset is given."
            }
            ToolName::GetAccountStatus => "Get the account API trading status.",
            ToolName::GetOpenOrders => {
                "Get open orders for a trading pair, or for all pairs when no symbol is given."
            }
            ToolName::GetAllOrders => "Get all orders (active, canceled, filled) for a trading pair.",
            ToolName::CancelAllOrders => "Cancel all open orders on a trading pair.",
            ToolName::CancelOpenOrders => {
                "Cancel all open orders on a trading pair (alias for cancel_all_orders)."
            }
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::all()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| format!("unknown tool: {}", s))
    }
}
