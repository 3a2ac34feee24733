//! Translation catalogs loaded from YAML files.
//!
//! A catalog is a flat key/value mapping:
//!
//! ```yaml
//! qtype.q: Qualifiziert
//! qtype.nq: Nicht qualifiziert
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use super::Translator;
use crate::error::{QbookError, Result};

/// A translation catalog: label key to localized text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    strings: HashMap<String, String>,
}

impl Catalog {
    /// Load a catalog from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QbookError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let catalog: Self =
            serde_yaml::from_str(&content).map_err(|e| QbookError::CatalogParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            "Loaded catalog from {} ({} strings)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Get the text for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(|s| s.as_str())
    }

    /// Insert or replace the text for a key.
    pub fn insert(&mut self, key: &str, text: &str) {
        self.strings.insert(key.to_string(), text.to_string());
    }

    /// Number of strings in the catalog.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the catalog holds no strings.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl FromStr for Catalog {
    type Err = QbookError;

    fn from_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(|e| QbookError::CatalogParseError {
            path: "<inline>".into(),
            message: e.to_string(),
        })
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }
}
