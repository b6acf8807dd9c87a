// Library interface for testing

pub mod codes;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod extract;
pub mod import;
pub mod queries;
pub mod report;
pub mod schema;
pub mod value;

pub use error::{LedgerError, Result};
