// tool document loading/validation and environment settings
pub mod env;
pub mod loader;
pub mod validator;

use std::path::Path;

pub use env::{Credentials, Environment};
pub use loader::{RawCategory, RawConfig};
pub use validator::{CategoryConfig, ResolvedToolSet, ToolsConfig};

use crate::error::ConfigError;

/// Load and validate in one step; either failure aborts startup.
pub fn load_tools_config(path: &Path) -> Result<ToolsConfig, ConfigError> {
    let raw = loader::load(path)?;
    validator::validate(&raw)
}
