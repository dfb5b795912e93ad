//! Configuration system for gots.
//!
//! Loads config from:
//! 1. Global: ~/.config/gots/config.toml
//! 2. Per-project: .gots/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! enable_json_tag_check = false
//!
//! [types.go_to_ts]
//! "uuid.UUID" = "string"
//!
//! [types.ts_to_go]
//! Date = "time.Time"
//! ```

use anyhow::Context;
use gots_convert::TypeTables;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Extra entries for the type mapping tables.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TypeOverrides {
    pub go_to_ts: BTreeMap<String, String>,
    pub ts_to_go: BTreeMap<String, String>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GotsConfig {
    /// Add missing json tags instead of converting untagged Go structs.
    /// Unset means enabled.
    pub enable_json_tag_check: Option<bool>,
    pub types: TypeOverrides,
}

impl GotsConfig {
    /// Load configuration for a project rooted at `root`.
    pub fn load(root: &Path) -> Self {
        Self::load_layers(Self::global_config_path().as_deref(), root)
    }

    fn load_layers(global: Option<&Path>, root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global) = global.and_then(Self::try_load_file) {
            config = config.merge(global);
        }

        let project_path = root.join(".gots").join("config.toml");
        if let Some(project) = Self::try_load_file(&project_path) {
            config = config.merge(project);
        }

        config
    }

    /// Load a single file given explicitly; unlike the search path, a
    /// missing or invalid file is an error.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    fn try_load_file(path: &Path) -> Option<Self> {
        if !path.is_file() {
            return None;
        }
        match Self::load_file(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!("ignoring config: {e:#}");
                None
            }
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("gots").join("config.toml"))
    }

    /// Merge another config into this one; values set in `other` win.
    fn merge(mut self, other: Self) -> Self {
        self.enable_json_tag_check = other.enable_json_tag_check.or(self.enable_json_tag_check);
        self.types.go_to_ts.extend(other.types.go_to_ts);
        self.types.ts_to_go.extend(other.types.ts_to_go);
        self
    }

    pub fn tag_check(&self) -> bool {
        self.enable_json_tag_check.unwrap_or(true)
    }

    /// Built-in tables extended with the configured entries.
    pub fn type_tables(&self) -> TypeTables {
        let mut tables = TypeTables::builtin();
        tables.extend(TypeTables {
            go_to_ts: self.types.go_to_ts.clone(),
            ts_to_go: self.types.ts_to_go.clone(),
        });
        tables
    }
}
