use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_DB_PATH, DEFAULT_IMPORT_TARGET_PATH, DEFAULT_OUTPUT_PATH};
use crate::error::{LedgerError, Result};

/// Optional TOML configuration shared by all commands.
///
/// ```toml
/// db_path = "./mclassbookstore.db"
/// output_path = "./extracted_data.json"
/// import_target_path = "./database.sqlite"
/// ```
///
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerConfig {
    /// Source ledger database (default: ./mclassbookstore.db)
    pub db_path: Option<PathBuf>,
    /// Extracted JSON document (default: ./extracted_data.json)
    pub output_path: Option<PathBuf>,
    /// Database written by the import command (default: ./database.sqlite)
    pub import_target_path: Option<PathBuf>,
}

impl LedgerConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            LedgerError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| {
            LedgerError::Config(format!(
                "Failed to parse config file '{}': {}",
                config_path.display(),
                e
            ))
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn db_path(&self, flag: Option<PathBuf>) -> PathBuf {
        resolve(flag, &self.db_path, DEFAULT_DB_PATH)
    }

    pub fn output_path(&self, flag: Option<PathBuf>) -> PathBuf {
        resolve(flag, &self.output_path, DEFAULT_OUTPUT_PATH)
    }

    pub fn import_target_path(&self, flag: Option<PathBuf>) -> PathBuf {
        resolve(flag, &self.import_target_path, DEFAULT_IMPORT_TARGET_PATH)
    }
}

fn resolve(flag: Option<PathBuf>, configured: &Option<PathBuf>, default: &str) -> PathBuf {
    flag.or_else(|| configured.clone())
        .unwrap_or_else(|| PathBuf::from(default))
}
