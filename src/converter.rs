//! Converter table: caller-supplied type-name overrides
//!
//! A converter file is a YAML map from a resolved declared-type name to the
//! replacement to emit instead, e.g.
//!
//! ```yaml
//! google.protobuf.Timestamp: Date
//! common.Money: BigNumber
//! ```
//!
//! Overrides apply to message-typed fields only; a hit always forces the
//! original-type documentation comment so the substitution stays visible in
//! the generated output.

use crate::GeneratorError;
use serde::Deserialize;
use std::collections::HashMap;

/// Read-only mapping from a declared type name to its replacement
///
/// Loaded once per generation run, before translation begins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ConverterTable {
    map: HashMap<String, String>,
}

impl ConverterTable {
    /// Load a converter table from a YAML file.
    ///
    /// An unreadable or unparseable file is fatal to the whole run. An empty
    /// file yields an empty table.
    pub fn load(path: &str) -> Result<Self, GeneratorError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GeneratorError::InvalidConfig(format!(
                "Failed to read converter file '{}': {}",
                path, e
            ))
        })?;

        if contents.trim().is_empty() {
            return Ok(ConverterTable::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            GeneratorError::InvalidConfig(format!(
                "Failed to parse converter file '{}': {}",
                path, e
            ))
        })
    }

    /// Look up a replacement for a resolved declared type name
    pub fn lookup(&self, declared_type: &str) -> Option<&str> {
        self.map.get(declared_type).map(String::as_str)
    }

    /// Whether the table holds no overrides
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(String, String)> for ConverterTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        ConverterTable {
            map: iter.into_iter().collect(),
        }
    }
}
