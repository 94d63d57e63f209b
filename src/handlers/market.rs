use serde_json::Value;

use super::{parse_args, schema};
use crate::error::ToolError;
use crate::services::BinanceClient;
use crate::types::{
    KlinesParams, NoParams, OptionalSymbolParams, OrderBookParams, SymbolParams, ToolName,
    TradesParams,
};

pub(super) async fn call(
    client: &BinanceClient,
    tool: ToolName,
    args: Value,
) -> Result<Value, ToolError> {
    let market = client.market();
    let result = match tool {
        ToolName::GetSymbolTicker => market.get_ticker(&parse_args(args)?).await?,
        ToolName::GetOrderbook => market.get_orderbook(&parse_args(args)?).await?,
        ToolName::GetKlines => market.get_klines(&parse_args(args)?).await?,
        ToolName::GetTrades => market.get_trades(&parse_args(args)?).await?,
        ToolName::Get24hrTicker => market.get_24hr_ticker(&parse_args(args)?).await?,
        ToolName::GetAvgPrice => market.get_avg_price(&parse_args(args)?).await?,
        ToolName::GetExchangeInfo => market.get_exchange_info(&parse_args(args)?).await?,
        other => return Err(ToolError::UnknownTool(other.to_string())),
    };
    Ok(result)
}

pub(super) fn input_schema(tool: ToolName) -> Value {
    match tool {
        ToolName::GetSymbolTicker | ToolName::GetAvgPrice => schema::<SymbolParams>(),
        ToolName::GetOrderbook => schema::<OrderBookParams>(),
        ToolName::GetKlines => schema::<KlinesParams>(),
        ToolName::GetTrades => schema::<TradesParams>(),
        ToolName::Get24hrTicker | ToolName::GetExchangeInfo => schema::<OptionalSymbolParams>(),
        _ => schema::<NoParams>(),
    }
}
