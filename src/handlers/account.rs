use serde_json::Value;

use super::{parse_args, schema};
use crate::error::ToolError;
use crate::services::BinanceClient;
use crate::types::{BalanceParams, NoParams, ToolName};

pub(super) async fn call(
    client: &BinanceClient,
    tool: ToolName,
    args: Value,
) -> Result<Value, ToolError> {
    let account = client.account();
    let result = match tool {
        ToolName::GetAccountInfo => {
            let _: NoParams = parse_args(args)?;
            account.get_account_info().await?
        }
        ToolName::GetBalance => account.get_balance(&parse_args(args)?).await?,
        ToolName::GetAccountStatus => {
            let _: NoParams = parse_args(args)?;
            account.get_account_status().await?
        }
        other => return Err(ToolError::UnknownTool(other.to_string())),
    };
    Ok(result)
}

pub(super) fn input_schema(tool: ToolName) -> Value {
    match tool {
        ToolName::GetBalance => schema::<BalanceParams>(),
        _ => schema::<NoParams>(),
    }
}
