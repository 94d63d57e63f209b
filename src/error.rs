// error types; startup errors are fatal, ToolError is reported per invocation

use std::fmt;
use std::path::PathBuf;

use serde_json::{Value, json};
use thiserror::Error;

use crate::types::ToolCategory;

/// One problem found while validating the tool configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    MissingTools,
    MissingEnabled { category: ToolCategory },
    MissingToolList { category: ToolCategory },
    UnknownTool { category: ToolCategory, tool: String },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::MissingTools => write!(f, "missing 'tools' key in configuration"),
            ConfigIssue::MissingEnabled { category } => {
                write!(f, "missing 'enabled' key for category '{}'", category)
            }
            ConfigIssue::MissingToolList { category } => {
                write!(f, "missing 'tools' key for category '{}'", category)
            }
            ConfigIssue::UnknownTool { category, tool } => {
                let valid: Vec<&str> = category.allowed().iter().map(|t| t.as_str()).collect();
                write!(
                    f,
                    "unknown tool '{}' in category '{}' (valid tools: {})",
                    tool,
                    category,
                    valid.join(", ")
                )
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("configuration validation failed: {}", join_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ConfigError {
    pub fn issues(&self) -> &[ConfigIssue] {
        match self {
            ConfigError::Invalid(issues) => issues,
            _ => &[],
        }
    }
}

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("{0} not found in environment variables")]
    Missing(&'static str),
}

#[derive(Error, Debug)]
pub enum ExchangeError {
    /// Rejection reported by the exchange itself, e.g. insufficient balance.
    #[error("exchange error {code} (http {status}): {msg}")]
    Api { status: u16, code: i64, msg: String },

    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response from exchange: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected response from exchange: {0}")]
    Malformed(String),

    #[error("invalid proxy url {url}: {reason}")]
    InvalidProxy { url: String, reason: String },

    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid api key: {0}")]
    InvalidApiKey(String),
}

impl ExchangeError {
    /// Structured body handed back to the tool caller.
    pub fn to_payload(&self) -> Value {
        match self {
            ExchangeError::Api { status, code, msg } => json!({
                "error": { "code": code, "msg": msg, "status": status }
            }),
            ExchangeError::Http { status, body } => json!({
                "error": { "code": "http_error", "msg": body, "status": status }
            }),
            other => json!({
                "error": { "code": "request_failed", "msg": other.to_string() }
            }),
        }
    }
}

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}

impl ToolError {
    pub fn to_payload(&self) -> Value {
        match self {
            ToolError::Exchange(e) => e.to_payload(),
            ToolError::InvalidParams(msg) => json!({
                "error": { "code": "invalid_params", "msg": msg }
            }),
            ToolError::UnknownTool(name) => json!({
                "error": { "code": "unknown_tool", "msg": format!("unknown tool: {}", name) }
            }),
        }
    }
}
