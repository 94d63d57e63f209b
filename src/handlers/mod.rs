// tool handlers and the registry that exposes them

mod account;
mod market;
mod order;
mod trading;

use std::collections::HashMap;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::config::ResolvedToolSet;
use crate::error::ToolError;
use crate::services::BinanceClient;
use crate::types::{ToolCategory, ToolDefinition, ToolName};

/// Registered tools by name, built once at startup.
pub struct ToolRegistry {
    client: Arc<BinanceClient>,
    order: Vec<ToolName>,
    by_name: HashMap<&'static str, ToolName>,
}

impl ToolRegistry {
    pub fn new(client: Arc<BinanceClient>, resolved: &ResolvedToolSet) -> Self {
        for category in ToolCategory::ALL {
            let names: Vec<&str> = resolved.in_category(category).map(|t| t.as_str()).collect();
            if !names.is_empty() {
                info!(category = %category, tools = ?names, "registered {} tools", category);
            }
        }

        let order: Vec<ToolName> = resolved.iter().collect();
        let by_name = order.iter().map(|tool| (tool.as_str(), *tool)).collect();
        info!(count = order.len(), "all tools registered");

        Self {
            client,
            order,
            by_name,
        }
    }

    pub fn get(&self, name: &str) -> Option<ToolName> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.order.iter().map(|tool| definition(*tool)).collect()
    }

    /// Runs one registered tool. Unregistered names are rejected even if
    /// they are valid tool names.
    pub async fn call(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        debug!(tool = %tool, "invoking tool");

        match tool.category() {
            ToolCategory::Market => market::call(&self.client, tool, args).await,
            ToolCategory::Trading => trading::call(&self.client, tool, args).await,
            ToolCategory::Account => account::call(&self.client, tool, args).await,
            ToolCategory::Order => order::call(&self.client, tool, args).await,
        }
    }
}

pub fn definition(tool: ToolName) -> ToolDefinition {
    let input_schema = match tool.category() {
        ToolCategory::Market => market::input_schema(tool),
        ToolCategory::Trading => trading::input_schema(tool),
        ToolCategory::Account => account::input_schema(tool),
        ToolCategory::Order => order::input_schema(tool),
    };
    ToolDefinition {
        name: tool.as_str().to_string(),
        description: tool.description().to_string(),
        input_schema,
    }
}

/// Missing arguments mean an empty object.
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|e| ToolError::InvalidParams(e.to_string()))
}

fn schema<T: JsonSchema>() -> Value {
    let generator = schemars::r#gen::SchemaSettings::draft07()
        .with(|settings| {
            settings.inline_subschemas = true;
            settings.meta_schema = None;
        })
        .into_generator();
    let root = generator.into_root_schema_for::<T>();
    serde_json::to_value(root).unwrap_or_else(|_| json!({ "type": "object" }))
}
