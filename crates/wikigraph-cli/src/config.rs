//! Configuration for the `wikigraph` CLI.
//!
//! Provides the [`WikigraphConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `WIKIGRAPH_CONFIG` environment variable
//! 3. XDG default: `~/.config/wikigraph/config.toml`
//! 4. Built-in defaults

use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use wikigraph_core::{Error, Result};

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the `wikigraph` CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WikigraphConfig {
    /// Path to the serialized graph document.
    pub graph_path: Option<String>,

    /// Output formatting configuration.
    pub display: DisplayConfig,

    /// Query behavior configuration.
    pub query: QueryConfig,
}

/// Output formatting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Separator between titles in list output.
    pub separator: String,

    /// Render canonical underscore-joined titles with spaces.
    pub replace_underscores: bool,

    /// Build page URLs from the stable curid instead of the title.
    pub use_curid: bool,
}

/// Query behavior configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Include hidden maintenance categories in query results.
    pub include_hidden: bool,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for WikigraphConfig {
    fn default() -> Self {
        Self {
            graph_path: None,
            display: DisplayConfig::default(),
            query: QueryConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            separator: "; ".to_string(),
            replace_underscores: true,
            use_curid: false,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl WikigraphConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// Loading priority:
    /// 1. Explicit `config_path` (from `--config` flag)
    /// 2. `WIKIGRAPH_CONFIG` env var
    /// 3. XDG default: `~/.config/wikigraph/config.toml`
    /// 4. Built-in defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("WIKIGRAPH");
        env_opts.add_section("display");
        env_opts.add_section("query");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        // 1. Explicit --config flag
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        // 2. WIKIGRAPH_CONFIG env var
        if let Ok(path) = std::env::var("WIKIGRAPH_CONFIG") {
            return Some(PathBuf::from(path));
        }

        // 3. XDG default
        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("wikigraph").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Resolve the graph document path from a flag override or the config.
    pub fn resolve_graph_path(&self, flag: Option<&str>) -> Result<PathBuf> {
        flag.or(self.graph_path.as_deref())
            .map(PathBuf::from)
            .ok_or_else(|| {
                Error::config(
                    "no graph document configured — pass --graph or set graph_path in the config",
                )
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
