use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Errors produced by the ledger tools
#[derive(Debug)]
pub enum LedgerError {
    /// Connection or query failure reported by SQLite
    Database(sqlx::Error),
    /// Reading or writing a file failed
    Io { path: PathBuf, source: std::io::Error },
    /// Encoding or decoding the JSON document failed
    Serialization(serde_json::Error),
    /// Config file could not be read or parsed
    Config(String),
    /// The blocking runtime could not be started
    Runtime(std::io::Error),
    /// Every code in the allocator's range has already been issued
    CodeSpaceExhausted { issued: usize },
}

impl LedgerError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LedgerError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::Database(err) => write!(f, "{}", err),
            LedgerError::Io { path, source } => {
                write!(f, "File error '{}': {}", path.display(), source)
            }
            LedgerError::Serialization(err) => write!(f, "JSON error: {}", err),
            LedgerError::Config(msg) => write!(f, "Config error: {}", msg),
            LedgerError::Runtime(err) => write!(f, "Runtime error: {}", err),
            LedgerError::CodeSpaceExhausted { issued } => write!(
                f,
                "No unused student codes left after issuing {} codes",
                issued
            ),
        }
    }
}

impl StdError for LedgerError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            LedgerError::Database(err) => Some(err),
            LedgerError::Io { source, .. } => Some(source),
            LedgerError::Serialization(err) => Some(err),
            LedgerError::Runtime(err) => Some(err),
            LedgerError::Config(_) | LedgerError::CodeSpaceExhausted { .. } => None,
        }
    }
}

impl From<sqlx::Error> for LedgerError {
    fn from(err: sqlx::Error) -> Self {
        LedgerError::Database(err)
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization(err)
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
