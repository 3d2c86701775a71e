//! Feed configuration module.
//!
//! Handles loading, validating, and merging `mosaic.toml`. User values are
//! layered on top of the stock defaults, so a file only needs the keys it
//! wants to change. Command-line flags override both.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! layout = "wide"           # wide (tablet) | narrow (phone)
//! strategy = "simple"       # simple (masonry) | category (uniform rails)
//! max_groups = 10           # positive group count, or "unlimited"
//!
//! [paging]
//! page_size = 12            # results per fetched page
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::grouping::{Adder, MaxGroups, Strategy};
use crate::session::DEFAULT_SEARCH_MAX_GROUPS;
use crate::types::LayoutMode;

/// File name looked up in the config directory.
pub const CONFIG_FILE: &str = "mosaic.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Feed configuration loaded from `mosaic.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    /// Screen class the groups are shaped for.
    pub layout: LayoutMode,
    /// Masonry feed or uniform rails.
    pub strategy: Strategy,
    /// Stop opening groups once the feed holds this many.
    pub max_groups: MaxGroups,
    pub paging: PagingConfig,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Wide,
            strategy: Strategy::Simple,
            max_groups: MaxGroups::Limit(DEFAULT_SEARCH_MAX_GROUPS),
            paging: PagingConfig::default(),
        }
    }
}

impl FeedConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_groups == MaxGroups::Limit(0) {
            return Err(ConfigError::Validation(
                "max_groups must be at least 1 or \"unlimited\"".into(),
            ));
        }
        if self.paging.page_size == 0 {
            return Err(ConfigError::Validation(
                "paging.page_size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Build the adder this config describes.
    pub fn adder(&self) -> Adder {
        Adder::new(self.strategy, self.layout, self.max_groups)
    }
}

/// How results are fetched from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagingConfig {
    pub page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self { page_size: 12 }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(FeedConfig::default())?)
}

/// Layer a user `mosaic.toml` over the stock defaults.
///
/// A `[paging]` table in the file only replaces the keys it names; top-level
/// scalars such as `layout` or `max_groups` replace the default outright.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `mosaic.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Turn the defaults plus an optional user file into a validated
/// [`FeedConfig`]. Unknown keys in the file surface here as parse errors.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<FeedConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: FeedConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `mosaic.toml` in the given directory, falling back to
/// the stock defaults when there is no file.
pub fn load_config(dir: &Path) -> Result<FeedConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `mosaic.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# recipe-mosaic configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Screen class the feed is shaped for.
#   wide   - tablet: masonry opens with a big "left" block, rails hold 4
#   narrow - phone: masonry alternates single / row2, rails hold 2
layout = "wide"

# Packing strategy.
#   simple   - masonry: left -> row3 -> right -> left ... (wide)
#   category - uniform rails of one shape
strategy = "simple"

# Stop opening new groups once the feed holds this many.
# A limited feed keeps fetching pages until it is full.
# Use "unlimited" to page only on demand.
max_groups = 10

# ---------------------------------------------------------------------------
# Paging
# ---------------------------------------------------------------------------
[paging]
# Results delivered per page by the source.
page_size = 12
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::CategoryAdder;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_a_limited_wide_masonry_feed() {
        let config = FeedConfig::default();
        assert_eq!(config.layout, LayoutMode::Wide);
        assert_eq!(config.strategy, Strategy::Simple);
        assert_eq!(config.max_groups, MaxGroups::Limit(10));
        assert_eq!(config.paging.page_size, 12);
    }

    #[test]
    fn parse_partial_config() {
        let config: FeedConfig = toml::from_str("layout = \"narrow\"").unwrap();
        assert_eq!(config.layout, LayoutMode::Narrow);
        assert_eq!(config.strategy, Strategy::Simple);
        assert_eq!(config.paging.page_size, 12);
    }

    #[test]
    fn parse_unlimited_max_groups() {
        let config: FeedConfig = toml::from_str("max_groups = \"unlimited\"").unwrap();
        assert_eq!(config.max_groups, MaxGroups::Unlimited);
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
strategy = "category"
max_groups = 3

[paging]
page_size = 40
"#,
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.strategy, Strategy::Category);
        assert_eq!(config.max_groups, MaxGroups::Limit(3));
        assert_eq!(config.paging.page_size, 40);
        assert_eq!(config.layout, LayoutMode::Wide);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "layout = ").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(toml::from_str::<FeedConfig>("max_group = 3").is_err());
    }

    #[test]
    fn unknown_nested_key_rejected() {
        let toml_str = "[paging]\npage = 3\n";
        assert!(toml::from_str::<FeedConfig>(toml_str).is_err());
    }

    #[test]
    fn unknown_layout_rejected() {
        assert!(toml::from_str::<FeedConfig>("layout = \"watch\"").is_err());
    }

    #[test]
    fn validate_zero_max_groups() {
        let config = FeedConfig {
            max_groups: MaxGroups::Limit(0),
            ..FeedConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_zero_page_size() {
        let mut config = FeedConfig::default();
        config.paging.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "max_groups = 0").unwrap();
        let err = load_config(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("max_groups"));
    }

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["b"].as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_table_merge_preserves_base_keys() {
        let base: toml::Value = toml::from_str("[paging]\npage_size = 12\nextra = 1").unwrap();
        let overlay: toml::Value = toml::from_str("[paging]\npage_size = 5").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["paging"]["page_size"].as_integer(), Some(5));
        assert_eq!(merged["paging"]["extra"].as_integer(), Some(1));
    }

    #[test]
    fn partial_paging_table_keeps_other_defaults() {
        let overlay: toml::Value = toml::from_str("max_groups = 4\n[paging]\npage_size = 3").unwrap();
        let config = resolve_config(stock_defaults_value().unwrap(), Some(overlay)).unwrap();
        assert_eq!(config.max_groups, MaxGroups::Limit(4));
        assert_eq!(config.paging.page_size, 3);
        assert_eq!(config.layout, LayoutMode::Wide);
        assert_eq!(config.strategy, Strategy::Simple);
    }

    #[test]
    fn resolve_config_with_no_overlay() {
        let config = resolve_config(stock_defaults_value().unwrap(), None).unwrap();
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: FeedConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn stock_defaults_value_is_table() {
        let value = stock_defaults_value().unwrap();
        assert!(value.is_table());
        assert_eq!(value["max_groups"].as_integer(), Some(10));
        assert_eq!(value["layout"].as_str(), Some("wide"));
    }

    #[test]
    fn config_builds_matching_adder() {
        let config = FeedConfig {
            strategy: Strategy::Category,
            layout: LayoutMode::Narrow,
            ..FeedConfig::default()
        };
        assert_eq!(
            config.adder(),
            Adder::Category(CategoryAdder::new(LayoutMode::Narrow, MaxGroups::Limit(10)))
        );
    }
}
