use serde_json::Value;

use super::{parse_args, schema};
use crate::error::ToolError;
use crate::services::BinanceClient;
use crate::types::{NewOrderParams, NoParams, OrderLookupParams, TestOrderParams, ToolName};

pub(super) async fn call(
    client: &BinanceClient,
    tool: ToolName,
    args: Value,
) -> Result<Value, ToolError> {
    let trading = client.trading();
    let result = match tool {
        ToolName::CreateOrder => trading.create_order(&parse_args(args)?).await?,
        ToolName::TestOrder => trading.test_order(&parse_args(args)?).await?,
        ToolName::CancelOrder => trading.cancel_order(&order_lookup(args)?).await?,
        ToolName::GetOrder => trading.get_order(&order_lookup(args)?).await?,
        other => return Err(ToolError::UnknownTool(other.to_string())),
    };
    Ok(result)
}

/// The exchange needs either the exchange order id or the client order id.
fn order_lookup(args: Value) -> Result<OrderLookupParams, ToolError> {
    let params: OrderLookupParams = parse_args(args)?;
    if !params.has_order_ref() {
        return Err(ToolError::InvalidParams(
            "either order_id or orig_client_order_id is required".to_string(),
        ));
    }
    Ok(params)
}

pub(super) fn input_schema(tool: ToolName) -> Value {
    match tool {
        ToolName::CreateOrder => schema::<NewOrderParams>(),
        ToolName::TestOrder => schema::<TestOrderParams>(),
        ToolName::CancelOrder | ToolName::GetOrder => schema::<OrderLookupParams>(),
        _ => schema::<NoParams>(),
    }
}
