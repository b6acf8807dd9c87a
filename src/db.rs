use log::debug;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::future::Future;
use std::path::Path;
use tokio::runtime::Runtime;

use crate::error::{LedgerError, Result};

/// Synchronous SQLite handle that owns a runtime for blocking operations.
/// Each tool holds exactly one of these for its whole run.
pub struct SyncDb {
    pool: SqlitePool,
    runtime: Runtime,
}

impl SyncDb {
    /// Open an existing database without write access
    pub fn open_readonly(db_path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .read_only(true);
        Self::connect(options, db_path)
    }

    /// Open a database for writing, creating the file if it doesn't exist.
    /// Enables foreign keys
    pub fn create(db_path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true);
        Self::connect(options, db_path)
    }

    fn connect(options: SqliteConnectOptions, db_path: &Path) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(LedgerError::Runtime)?;
        let pool = runtime.block_on(
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(options),
        )?;
        debug!("Opened SQLite database: {}", db_path.display());
        Ok(Self { pool, runtime })
    }

    /// Block on an async future using the embedded runtime
    pub fn block_on<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.runtime.block_on(fut)
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Release the connection
    pub fn close(self) {
        let SyncDb { pool, runtime } = self;
        runtime.block_on(pool.close());
    }
}
