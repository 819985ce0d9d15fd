//! Adapter configuration.
//!
//! An explicitly constructed value handed to `NullDbAdapter::establish`.
//! Can be built in code or loaded from YAML files and environment
//! variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::interfaces::{AdapterError, Result};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "nulldb.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "NULLDB_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "NULLDB";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "NULLDB_LOG";
/// Value of `adapter` for this engine.
pub const ADAPTER_CONFIG_NAME: &str = "nulldb";

/// Connection configuration for the null adapter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NullDbConfig {
    /// Adapter name as connection settings carry it.
    pub adapter: String,
    /// Project root that relative schema paths resolve against.
    pub project_root: Option<PathBuf>,
    /// Schema file, relative to `project_root` unless absolute.
    /// Defaults to `db/schema.yaml` when `project_root` is set.
    pub schema: Option<PathBuf>,
    /// Identifier floor; the first generated id is `initial_id + 1`.
    pub initial_id: i64,
}

impl Default for NullDbConfig {
    fn default() -> Self {
        Self {
            adapter: ADAPTER_CONFIG_NAME.to_string(),
            project_root: None,
            schema: None,
            initial_id: 0,
        }
    }
}

impl NullDbConfig {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `nulldb.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix and `__` separator
    pub fn load(path: Option<&str>) -> Result<Self> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Create config for testing.
    pub fn for_test() -> Self {
        Self::default()
    }

    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    pub fn with_schema(mut self, schema: impl Into<PathBuf>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_initial_id(mut self, initial_id: i64) -> Self {
        self.initial_id = initial_id;
        self
    }

    /// The project root, or `ConfigurationMissing` if it was never set.
    pub fn require_project_root(&self) -> Result<&Path> {
        self.project_root
            .as_deref()
            .ok_or(AdapterError::ConfigurationMissing("project_root"))
    }
}
