// checks every listed tool name against its category allow-list, enabled or not

use tracing::{info, warn};

use super::loader::{RawCategory, RawConfig};
use crate::error::{ConfigError, ConfigIssue};
use crate::types::{ToolCategory, ToolName};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryConfig {
    pub category: ToolCategory,
    pub enabled: bool,
    pub tools: Vec<ToolName>,
}

/// Validated configuration. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolsConfig {
    pub categories: Vec<CategoryConfig>,
    /// Category keys that matched no known category.
    pub ignored_categories: Vec<String>,
}

impl ToolsConfig {
    pub fn category(&self, category: ToolCategory) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Tools of enabled categories, in registration order.
    pub fn resolve(&self) -> ResolvedToolSet {
        self.categories
            .iter()
            .filter(|c| c.enabled)
            .flat_map(|c| c.tools.iter().copied())
            .collect()
    }
}

/// The tools actually registered at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedToolSet {
    tools: Vec<ToolName>,
}

impl ResolvedToolSet {
    pub fn contains(&self, tool: ToolName) -> bool {
        self.tools.contains(&tool)
    }

    pub fn iter(&self) -> impl Iterator<Item = ToolName> + '_ {
        self.tools.iter().copied()
    }

    pub fn in_category(&self, category: ToolCategory) -> impl Iterator<Item = ToolName> + '_ {
        self.iter().filter(move |tool| tool.category() == category)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl FromIterator<ToolName> for ResolvedToolSet {
    fn from_iter<I: IntoIterator<Item = ToolName>>(iter: I) -> Self {
        let mut set = Self::default();
        for tool in iter {
            if !set.contains(tool) {
                set.tools.push(tool);
            }
        }
        set
    }
}

pub fn validate(raw: &RawConfig) -> Result<ToolsConfig, ConfigError> {
    let Some(sections) = raw.tools.as_ref() else {
        return Err(fail(vec![ConfigIssue::MissingTools]));
    };

    let mut issues = Vec::new();
    let mut categories = Vec::new();

    for category in ToolCategory::ALL {
        if let Some(section) = sections.get(category.as_str()) {
            if let Some(config) = validate_category(category, section, &mut issues) {
                categories.push(config);
            }
        }
    }

    let ignored_categories: Vec<String> = sections
        .keys()
        .filter(|key| key.parse::<ToolCategory>().is_err())
        .cloned()
        .collect();
    for key in &ignored_categories {
        warn!(category = %key, "unknown tool category, ignoring");
    }

    if !issues.is_empty() {
        return Err(fail(issues));
    }

    info!("configuration validation successful");
    Ok(ToolsConfig {
        categories,
        ignored_categories,
    })
}

fn validate_category(
    category: ToolCategory,
    section: &RawCategory,
    issues: &mut Vec<ConfigIssue>,
) -> Option<CategoryConfig> {
    let names = section.tools.as_deref().unwrap_or_default();
    let before = issues.len();

    let Some(enabled) = section.enabled else {
        issues.push(ConfigIssue::MissingEnabled { category });
        return None;
    };
    if enabled && section.tools.is_none() {
        issues.push(ConfigIssue::MissingToolList { category });
    }

    let mut tools = Vec::with_capacity(names.len());
    for name in names {
        match category.tool(name) {
            Some(tool) if tools.contains(&tool) => {
                warn!(tool = %tool, category = %category, "duplicate tool entry, keeping first");
            }
            Some(tool) => tools.push(tool),
            None => issues.push(ConfigIssue::UnknownTool {
                category,
                tool: name.clone(),
            }),
        }
    }

    (issues.len() == before).then_some(CategoryConfig {
        category,
        enabled,
        tools,
    })
}

fn fail(issues: Vec<ConfigIssue>) -> ConfigError {
    for issue in &issues {
        tracing::error!("config validation error: {}", issue);
    }
    ConfigError::Invalid(issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validated(doc: &str) -> Result<ToolsConfig, ConfigError> {
        validate(&RawConfig::parse(doc).unwrap())
    }

    #[test]
    fn missing_tools_key() {
        let err = validated("server: {}\n").unwrap_err();
        assert_eq!(err.issues(), &[ConfigIssue::MissingTools]);
    }

    #[test]
    fn missing_enabled_flag() {
        let err = validated("tools:\n  account:\n    tools: [get_balance]\n").unwrap_err();
        assert_eq!(
            err.issues(),
            &[ConfigIssue::MissingEnabled {
                category: ToolCategory::Account
            }]
        );
    }

    #[test]
    fn enabled_category_needs_a_tool_list() {
        let err = validated("tools:\n  order:\n    enabled: true\n").unwrap_err();
        assert_eq!(
            err.issues(),
            &[ConfigIssue::MissingToolList {
                category: ToolCategory::Order
            }]
        );
    }

    #[test]
    fn disabled_category_may_omit_its_list() {
        let config = validated("tools:\n  order:\n    enabled: false\n").unwrap();
        assert!(config.resolve().is_empty());
    }

    #[test]
    fn names_are_checked_even_when_disabled() {
        let err = validated(
            "tools:\n  market:\n    enabled: false\n    tools: [get_ticker_typo]\n",
        )
        .unwrap_err();
        assert_eq!(
            err.issues(),
            &[ConfigIssue::UnknownTool {
                category: ToolCategory::Market,
                tool: "get_ticker_typo".to_string(),
            }]
        );
    }

    #[test]
    fn names_are_category_scoped() {
        // a real tool listed under the wrong category is still unknown there
        let err = validated("tools:\n  account:\n    enabled: true\n    tools: [create_order]\n")
            .unwrap_err();
        assert_eq!(
            err.issues(),
            &[ConfigIssue::UnknownTool {
                category: ToolCategory::Account,
                tool: "create_order".to_string(),
            }]
        );
    }

    #[test]
    fn every_issue_is_reported() {
        let err = validated(
            r#"
tools:
  market:
    tools: [get_klines]
  trading:
    enabled: true
    tools: [create_order, bogus_tool, other_bogus]
"#,
        )
        .unwrap_err();
        assert_eq!(err.issues().len(), 3);
    }

    #[test]
    fn unknown_category_is_ignored_with_warning() {
        let config = validated(
            "tools:\n  futures:\n    enabled: true\n    tools: [anything]\n  market:\n    enabled: true\n    tools: [get_trades]\n",
        )
        .unwrap();
        assert_eq!(config.ignored_categories, vec!["futures".to_string()]);
        assert_eq!(config.resolve().names(), vec!["get_trades"]);
    }

    #[test]
    fn duplicates_collapse() {
        let config = validated(
            "tools:\n  market:\n    enabled: true\n    tools: [get_klines, get_trades, get_klines]\n",
        )
        .unwrap();
        assert_eq!(
            config.category(ToolCategory::Market).unwrap().tools,
            vec![ToolName::GetKlines, ToolName::GetTrades]
        );
    }

    #[test]
    fn resolve_follows_category_order() {
        let config = validated(
            r#"
tools:
  order:
    enabled: true
    tools: [get_open_orders]
  market:
    enabled: true
    tools: [get_avg_price]
"#,
        )
        .unwrap();
        let resolved = config.resolve();
        assert_eq!(resolved.names(), vec!["get_avg_price", "get_open_orders"]);
        assert_eq!(resolved.in_category(ToolCategory::Order).count(), 1);
    }
}
