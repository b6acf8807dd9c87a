//! Payment status report over the `book` table

use log::{debug, error};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::constants::SAMPLE_ROW_LIMIT;
use crate::db::SyncDb;
use crate::error::Result;
use crate::queries::book;
use crate::value::SqlValue;

/// Classification of a raw `checking` value
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    /// Anything other than 0 or 1, NULL included
    Unknown(SqlValue),
}

impl PaymentStatus {
    pub fn classify(checking: &SqlValue) -> Self {
        if checking.equals_int(1) {
            PaymentStatus::Paid
        } else if checking.equals_int(0) {
            PaymentStatus::Unpaid
        } else {
            PaymentStatus::Unknown(checking.clone())
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "Paid"),
            PaymentStatus::Unpaid => write!(f, "Unpaid"),
            PaymentStatus::Unknown(value) => write!(f, "Unknown ({})", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusCount {
    pub status: PaymentStatus,
    pub count: i64,
}

impl<'r> FromRow<'r, SqliteRow> for StatusCount {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let checking: SqlValue = row.try_get(0)?;
        Ok(StatusCount {
            status: PaymentStatus::classify(&checking),
            count: row.try_get(1)?,
        })
    }
}

/// One row of the sample section, printed as-is
#[derive(Debug, Clone, PartialEq)]
pub struct BookSample {
    pub book_name: SqlValue,
    pub price: SqlValue,
    pub checking: SqlValue,
    pub payment_date: SqlValue,
}

impl<'r> FromRow<'r, SqliteRow> for BookSample {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(BookSample {
            book_name: row.try_get(0)?,
            price: row.try_get(1)?,
            checking: row.try_get(2)?,
            payment_date: row.try_get(3)?,
        })
    }
}

impl fmt::Display for BookSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.book_name.to_literal(),
            self.price.to_literal(),
            self.checking.to_literal(),
            self.payment_date.to_literal()
        )
    }
}

#[derive(Debug, Clone)]
pub struct PaymentReport {
    pub source: PathBuf,
    /// Column names of the book table in declaration order
    pub columns: Vec<String>,
    /// One entry per distinct `checking` value; empty for an empty table
    pub status_counts: Vec<StatusCount>,
    pub samples: Vec<BookSample>,
}

impl PaymentReport {
    pub fn total_books(&self) -> i64 {
        self.status_counts.iter().map(|c| c.count).sum()
    }

    pub fn count_for(&self, status: &PaymentStatus) -> Option<i64> {
        self.status_counts
            .iter()
            .find(|c| &c.status == status)
            .map(|c| c.count)
    }
}

impl fmt::Display for PaymentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Successfully connected to {}", self.source.display())?;

        writeln!(f, "\nSchema for 'book' table:")?;
        writeln!(f, "{:?}", self.columns)?;

        writeln!(f, "\nPayment status counts in {}:", self.source.display())?;
        if self.status_counts.is_empty() {
            writeln!(f, "No data found in 'book' table.")?;
        } else {
            for entry in &self.status_counts {
                writeln!(f, "- {}: {} books", entry.status, entry.count)?;
            }
        }

        writeln!(f, "\nSample book data:")?;
        for sample in &self.samples {
            writeln!(f, "{}", sample)?;
        }
        Ok(())
    }
}

/// Run the three report queries against an open database
pub fn collect_report(db: &SyncDb, source: &Path) -> Result<PaymentReport> {
    let count_sql = book::count_by_checking();
    let sample_sql = book::select_samples(SAMPLE_ROW_LIMIT);

    db.block_on(async {
        let pool = db.pool();

        let columns = sqlx::query(book::TABLE_INFO)
            .fetch_all(pool)
            .await?
            .iter()
            .map(|row| row.try_get::<String, _>("name"))
            .collect::<sqlx::Result<Vec<_>>>()?;

        let status_counts = sqlx::query_as::<_, StatusCount>(&count_sql)
            .fetch_all(pool)
            .await?;

        let samples = sqlx::query_as::<_, BookSample>(&sample_sql)
            .fetch_all(pool)
            .await?;

        debug!(
            "Collected {} status groups and {} samples",
            status_counts.len(),
            samples.len()
        );

        Ok(PaymentReport {
            source: source.to_path_buf(),
            columns,
            status_counts,
            samples,
        })
    })
}

/// Open the database, collect the report and release the connection on every path
pub fn generate_report(db_path: &Path) -> Result<PaymentReport> {
    let db = SyncDb::open_readonly(db_path)?;
    let report = collect_report(&db, db_path);
    db.close();
    report
}

/// Write the report, or the database error that prevented it, to `out`.
/// Database failures are reported and swallowed; only write failures escape.
pub fn run<W: Write>(db_path: &Path, out: &mut W) -> std::io::Result<()> {
    match generate_report(db_path) {
        Ok(report) => write!(out, "{}", report),
        Err(e) => {
            error!("Report on {} failed: {}", db_path.display(), e);
            writeln!(out, "Database error: {}", e)
        }
    }
}
