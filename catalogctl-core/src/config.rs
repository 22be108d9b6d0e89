//! Catalog configuration - root path and config file loading
//!
//! The catalog root comes from, in order of use by the CLI:
//! - `CATALOG_ROOT` environment variable
//! - a TOML config file (`root_dir = "..."`), by default `~/.catalogctl/config.toml`
//! - the current directory

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::kind::ResourceKind;

/// Environment variable naming the catalog root
pub const ROOT_ENV_VAR: &str = "CATALOG_ROOT";

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Root directory holding one subdirectory per resource kind
    pub root_dir: PathBuf,
}

impl CatalogConfig {
    /// Create config with explicit root directory
    pub fn with_root(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Create config from `CATALOG_ROOT`, defaulting to the current directory
    pub fn from_env() -> Self {
        let root_dir = std::env::var_os(ROOT_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self { root_dir }
    }

    /// Load config from a TOML file.
    ///
    /// A relative `root_dir` is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| {
            CatalogError::config(format!("invalid TOML in {}: {}", path.display(), e))
        })?;

        if config.root_dir.is_relative() {
            if let Some(base) = path.parent() {
                config.root_dir = base.join(&config.root_dir);
            }
        }

        Ok(config)
    }

    /// Default config file path: `~/.catalogctl/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".catalogctl").join("config.toml"))
    }

    /// Directory for a resource kind
    pub fn kind_path(&self, kind: &ResourceKind) -> PathBuf {
        self.root_dir.join(kind.dir())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
