use serde_json::Value;

use super::{parse_args, schema};
use crate::error::ToolError;
use crate::services::BinanceClient;
use crate::types::{AllOrdersParams, NoParams, OptionalSymbolParams, SymbolParams, ToolName};

pub(super) async fn call(
    client: &BinanceClient,
    tool: ToolName,
    args: Value,
) -> Result<Value, ToolError> {
    let orders = client.order();
    let result = match tool {
        ToolName::GetOpenOrders => orders.get_open_orders(&parse_args(args)?).await?,
        ToolName::GetAllOrders => orders.get_all_orders(&parse_args(args)?).await?,
        ToolName::CancelAllOrders => orders.cancel_all_orders(&parse_args(args)?).await?,
        ToolName::CancelOpenOrders => orders.cancel_open_orders(&parse_args(args)?).await?,
        other => return Err(ToolError::UnknownTool(other.to_string())),
    };
    Ok(result)
}

pub(super) fn input_schema(tool: ToolName) -> Value {
    match tool {
        ToolName::GetOpenOrders => schema::<OptionalSymbolParams>(),
        ToolName::GetAllOrders => schema::<AllOrdersParams>(),
        ToolName::CancelAllOrders | ToolName::CancelOpenOrders => schema::<SymbolParams>(),
        _ => schema::<NoParams>(),
    }
}
