// json-rpc method dispatch shared by both transports
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::handlers::ToolRegistry;
use crate::types::rpc::{
    CallToolResult, INVALID_PARAMS, INVALID_REQUEST, InitializeParams, JSONRPC_VERSION,
    METHOD_NOT_FOUND, PARSE_ERROR, RpcError, RpcRequest, RpcResponse, ToolCallParams,
};

pub const SERVER_NAME: &str = env!("CARGO_PKG_NAME");

/// Newest first; the first entry is offered when the client asks for
/// something we do not speak.
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2025-06-18", "2025-03-26", "2024-11-05"];

/// Parses one raw message and dispatches it. `None` means nothing is sent
/// back (notifications).
pub async fn handle_message(registry: &ToolRegistry, text: &str) -> Option<RpcResponse> {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "unparseable json-rpc message");
            return Some(RpcResponse::failure(
                Value::Null,
                RpcError::new(PARSE_ERROR, format!("parse error: {}", e)),
            ));
        }
    };

    if value.is_array() {
        return Some(RpcResponse::failure(
            Value::Null,
            RpcError::new(INVALID_REQUEST, "batch requests are not supported"),
        ));
    }

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    match serde_json::from_value::<RpcRequest>(value) {
        Ok(request) => dispatch(registry, request).await,
        Err(e) => Some(RpcResponse::failure(
            id,
            RpcError::new(INVALID_REQUEST, format!("invalid request: {}", e)),
        )),
    }
}

pub async fn dispatch(registry: &ToolRegistry, request: RpcRequest) -> Option<RpcResponse> {
    let Some(id) = request.id else {
        debug!(method = %request.method, "notification received");
        return None;
    };

    if request.jsonrpc != JSONRPC_VERSION {
        return Some(RpcResponse::failure(
            id,
            RpcError::new(INVALID_REQUEST, "jsonrpc must be \"2.0\""),
        ));
    }

    debug!(method = %request.method, "request received");
    let outcome = match request.method.as_str() {
        "initialize" => initialize(request.params),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({ "tools": registry.definitions() })),
        "tools/call" => call_tool(registry, request.params).await,
        other => Err(RpcError::new(
            METHOD_NOT_FOUND,
            format!("method not found: {}", other),
        )),
    };

    Some(match outcome {
        Ok(result) => RpcResponse::success(id, result),
        Err(error) => RpcResponse::failure(id, error),
    })
}

pub fn negotiate_version(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|wanted| {
            SUPPORTED_PROTOCOL_VERSIONS
                .iter()
                .find(|known| **known == wanted)
                .copied()
        })
        .unwrap_or(SUPPORTED_PROTOCOL_VERSIONS[0])
}

fn initialize(params: Option<Value>) -> Result<Value, RpcError> {
    let params: InitializeParams = match params {
        Some(value) => params_from(value)?,
        None => InitializeParams::default(),
    };
    let version = negotiate_version(params.protocol_version.as_deref());
    Ok(json!({
        "protocolVersion": version,
        "capabilities": { "tools": { "listChanged": false } },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
    }))
}

async fn call_tool(registry: &ToolRegistry, params: Option<Value>) -> Result<Value, RpcError> {
    let params: ToolCallParams = match params {
        Some(value) => params_from(value)?,
        None => return Err(RpcError::new(INVALID_PARAMS, "missing params")),
    };

    let result = match registry
        .call(&params.name, params.arguments.unwrap_or(Value::Null))
        .await
    {
        Ok(value) => CallToolResult::ok(value),
        Err(ToolError::UnknownTool(name)) => {
            return Err(RpcError::new(
                INVALID_PARAMS,
                format!("unknown tool: {}", name),
            ));
        }
        Err(e) => {
            warn!(tool = %params.name, error = %e, "tool call failed");
            CallToolResult::error(e.to_payload())
        }
    };
    Ok(json!(result))
}

fn params_from<T: DeserializeOwned>(value: Value) -> Result<T, RpcError> {
    serde_json::from_value(value)
        .map_err(|e| RpcError::new(INVALID_PARAMS, format!("invalid params: {}", e)))
}
