//! Schema loader.
//!
//! Locates a YAML schema file from configuration and replays it through
//! `SchemaStatements`, once, at adapter construction.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::NullDbConfig;
use crate::interfaces::{AdapterError, Result, SchemaStatements};
use crate::schema::SchemaDefinition;

/// Schema path used when a project root is configured without an
/// explicit schema.
pub const DEFAULT_SCHEMA_PATH: &str = "db/schema.yaml";

/// Loads one schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaLoader {
    path: PathBuf,
}

impl SchemaLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the schema file named by `config`.
    ///
    /// - `project_root` + `schema`: `schema` relative to the root (or as-is if absolute)
    /// - `project_root` only: `DEFAULT_SCHEMA_PATH` relative to the root
    /// - absolute `schema` only: used as-is
    /// - relative `schema` only: `ConfigurationMissing("project_root")`
    /// - neither: `None`, nothing to load
    pub fn resolve(config: &NullDbConfig) -> Result<Option<Self>> {
        match (&config.project_root, &config.schema) {
            (None, None) => Ok(None),
            (None, Some(schema)) if schema.is_absolute() => Ok(Some(Self::new(schema))),
            (None, Some(_)) => Err(AdapterError::ConfigurationMissing("project_root")),
            (Some(root), schema) => {
                let schema = schema
                    .as_deref()
                    .unwrap_or_else(|| Path::new(DEFAULT_SCHEMA_PATH));
                Ok(Some(Self::new(root.join(schema))))
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the schema file.
    ///
    /// The returned definition is always non-verbose.
    pub async fn read(&self) -> Result<SchemaDefinition> {
        let contents =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| AdapterError::SchemaIo {
                    path: self.path.clone(),
                    source,
                })?;
        let definition: SchemaDefinition =
            serde_yaml::from_str(&contents).map_err(|source| AdapterError::SchemaParse {
                path: self.path.clone(),
                source,
            })?;
        Ok(definition.verbose(false))
    }

    /// Read the schema file and replay it against `target`.
    pub async fn load<S>(&self, target: &S) -> Result<()>
    where
        S: SchemaStatements + ?Sized,
    {
        let definition = self.read().await?;
        definition.apply(target).await?;
        info!(
            path = %self.path.display(),
            tables = definition.tables.len(),
            "Loaded schema"
        );
        Ok(())
    }
}
