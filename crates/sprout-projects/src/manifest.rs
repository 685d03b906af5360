//! Project manifest (`package.json`) rewriting
//!
//! The manifest is read as a JSON object, `name` and `version` are
//! overwritten, and everything else passes through untouched. Key order is
//! preserved (serde_json `preserve_order`).

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use tracing::{debug, info};

/// A parsed manifest document
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    path: Utf8PathBuf,
    fields: Map<String, Value>,
}

impl Manifest {
    /// Read and parse the manifest at `path`
    pub fn load(path: &Utf8Path) -> Result<Self> {
        debug!("Reading manifest: {}", path);

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::manifest_not_found(path.as_str()),
            _ => Error::Io(e),
        })?;

        Self::parse(path, &content)
    }

    /// Parse manifest text that was read from `path`
    pub fn parse(path: &Utf8Path, content: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(fields) => Ok(Self {
                path: path.to_path_buf(),
                fields,
            }),
            other => Err(Error::invalid_manifest(
                path.as_str(),
                format!("expected a JSON object, found {}", json_kind(&other)),
            )),
        }
    }

    /// Value of a top-level field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Top-level string field
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Overwrite a top-level field, keeping its position when it already exists
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.fields.insert(key.to_string(), value.into());
    }

    /// Set `name` and `version`
    pub fn set_identity(&mut self, name: &str, version: &str) {
        self.set("name", name);
        self.set("version", version);
    }

    /// Render with two-space indentation and no trailing newline
    pub fn to_pretty_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.fields)?)
    }

    /// Write the manifest back to where it was read from
    pub fn save(&self) -> Result<()> {
        let content = self.to_pretty_string()?;
        std::fs::write(&self.path, content)?;
        debug!("Wrote manifest: {}", self.path);
        Ok(())
    }
}

/// Rewrite `name` and `version` of the manifest at `path` in place
pub fn rewrite_manifest(path: &Utf8Path, name: &str, version: &str) -> Result<Manifest> {
    let mut manifest = Manifest::load(path)?;
    manifest.set_identity(name, version);
    manifest.save()?;

    info!("Manifest updated: name={}, version={}", name, version);
    Ok(manifest)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
