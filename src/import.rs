//! Load an extracted document into a fresh database keyed by student code

use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

use crate::db::SyncDb;
use crate::error::{LedgerError, Result};
use crate::extract::ExtractedData;
use crate::queries::{ddl, import};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub students: usize,
    pub books: usize,
    /// Books whose student_code was null or matched no imported student
    pub skipped_books: usize,
}

pub fn read_document(input_path: &Path) -> Result<ExtractedData> {
    let content =
        std::fs::read_to_string(input_path).map_err(|e| LedgerError::io(input_path, e))?;
    let data = serde_json::from_str(&content)?;
    Ok(data)
}

/// Recreate the `students` and `books` tables in `target` and fill them from `data`.
/// Runs in a single transaction; existing rows in those tables are discarded.
/// A student without a name violates the NOT NULL constraint and aborts the import.
pub fn import_document(data: &ExtractedData, target: &Path) -> Result<ImportSummary> {
    let db = SyncDb::create(target)?;
    let outcome = db.block_on(async {
        let mut tx = db.pool().begin().await?;

        for sql in [
            ddl::drop_books_table(),
            ddl::drop_students_table(),
            ddl::create_students_table(),
            ddl::create_books_table(),
        ] {
            sqlx::query(&sql).execute(&mut *tx).await?;
        }

        let mut student_ids: HashMap<&str, i64> = HashMap::with_capacity(data.students.len());
        for student in &data.students {
            let sql = import::insert_student(student.name.as_deref(), &student.student_code);
            let result = sqlx::query(&sql).execute(&mut *tx).await?;
            student_ids.insert(student.student_code.as_str(), result.last_insert_rowid());
        }

        let mut summary = ImportSummary {
            students: data.students.len(),
            ..ImportSummary::default()
        };
        for book in &data.books {
            let student_id = book
                .student_code
                .as_deref()
                .and_then(|code| student_ids.get(code).copied());
            match student_id {
                Some(student_id) => {
                    let sql = import::insert_book(book, student_id);
                    sqlx::query(&sql).execute(&mut *tx).await?;
                    summary.books += 1;
                }
                None => {
                    warn!(
                        "Skipping book '{}' for unknown student_code: {}",
                        book.book_name,
                        book.student_code.as_deref().unwrap_or("null")
                    );
                    summary.skipped_books += 1;
                }
            }
        }

        tx.commit().await?;
        Ok(summary)
    });
    db.close();

    if let Ok(summary) = &outcome {
        info!(
            "Imported {} students and {} books into {}",
            summary.students,
            summary.books,
            target.display()
        );
    }
    outcome
}
