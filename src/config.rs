//! Configuration loading
//!
//! The configuration is a YAML mapping with two required keys:
//!
//! ```yaml
//! folder_path: notes/
//! yaml_front_matter: |-
//!   tags: [inbox]
//! ```
//!
//! [`ConfigDocument`] is the raw mapping as read from disk; [`Config`] is the
//! typed view the walker consumes.

use crate::error::{MatterStampError, Result};
use log::debug;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

pub const FOLDER_PATH_KEY: &str = "folder_path";
pub const FRONT_MATTER_KEY: &str = "yaml_front_matter";

/// A parsed configuration document
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    path: PathBuf,
    mapping: Mapping,
}

impl ConfigDocument {
    /// Read and parse the document at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content =
            fs::read_to_string(path).map_err(|err| MatterStampError::from_io(path, err))?;
        Self::parse(path, &content)
    }

    /// Parse document content; `path` is only used for error reporting
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = path.into();
        let value: Value = serde_yaml::from_str(content)
            .map_err(|err| MatterStampError::malformed_document(&path, err.to_string()))?;

        match value {
            Value::Mapping(mapping) => Ok(Self { path, mapping }),
            other => Err(MatterStampError::malformed_document(
                &path,
                format!("expected a mapping at the top level, found {}", describe(&other)),
            )),
        }
    }

    /// Path the document was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw value for `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.mapping.get(key)
    }

    /// Typed value for a key that must be present
    pub fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .get(key)
            .ok_or_else(|| MatterStampError::missing_key(key))?;
        serde_yaml::from_value(value.clone())
            .map_err(|err| MatterStampError::invalid_value(key, err.to_string()))
    }
}

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root folder to scan
    pub folder_path: PathBuf,
    /// Block inserted verbatim between the markers
    pub yaml_front_matter: String,
}

impl Config {
    pub fn new(folder_path: impl Into<PathBuf>, yaml_front_matter: impl Into<String>) -> Self {
        Self {
            folder_path: folder_path.into(),
            yaml_front_matter: yaml_front_matter.into(),
        }
    }

    /// Extract the required keys from a loaded document
    pub fn from_document(document: &ConfigDocument) -> Result<Self> {
        Ok(Self {
            folder_path: document.required(FOLDER_PATH_KEY)?,
            yaml_front_matter: document.required(FRONT_MATTER_KEY)?,
        })
    }

    /// Load and extract in one step
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_document(&ConfigDocument::load(path)?)
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
