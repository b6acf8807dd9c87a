//! Anonymized export of the student and book tables
//!
//! Internal student ids are replaced by freshly drawn public codes. Books keep
//! their fields but point at the code instead of the id. The document is built
//! from one read of both tables and written in full to the output path.

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::codes::CodeAllocator;
use crate::constants::JSON_INDENT;
use crate::db::SyncDb;
use crate::error::{LedgerError, Result};
use crate::queries::{book, student};
use crate::value::SqlValue;

/// Row of the source `student` table
#[derive(Debug, Clone, PartialEq)]
pub struct SourceStudent {
    pub id: i64,
    /// NULL names stay None and are exported as null
    pub name: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for SourceStudent {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(SourceStudent {
            id: row.try_get(0)?,
            name: row.try_get(1)?,
        })
    }
}

/// Row of the source `book` table
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBook {
    pub input_date: SqlValue,
    pub book_name: SqlValue,
    pub price: SqlValue,
    pub checking: SqlValue,
    pub student_id: SqlValue,
    pub payment_date: SqlValue,
}

impl<'r> FromRow<'r, SqliteRow> for SourceBook {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(SourceBook {
            input_date: row.try_get(0)?,
            book_name: row.try_get(1)?,
            price: row.try_get(2)?,
            checking: row.try_get(3)?,
            student_id: row.try_get(4)?,
            payment_date: row.try_get(5)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymizedStudent {
    pub old_id: i64,
    pub name: Option<String>,
    pub student_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymizedBook {
    pub input_date: SqlValue,
    pub book_name: SqlValue,
    pub price: SqlValue,
    pub checking: bool,
    /// None when the book's student_id matched no student
    pub student_code: Option<String>,
    pub payment_date: SqlValue,
}

/// The exported document: `{"students": [...], "books": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    pub students: Vec<AnonymizedStudent>,
    pub books: Vec<AnonymizedBook>,
}

pub fn read_students(db: &SyncDb) -> Result<Vec<SourceStudent>> {
    let sql = student::select_all();
    db.block_on(async {
        let students = sqlx::query_as::<_, SourceStudent>(&sql)
            .fetch_all(db.pool())
            .await?;
        Ok(students)
    })
}

pub fn read_books(db: &SyncDb) -> Result<Vec<SourceBook>> {
    let sql = book::select_all();
    db.block_on(async {
        let books = sqlx::query_as::<_, SourceBook>(&sql)
            .fetch_all(db.pool())
            .await?;
        Ok(books)
    })
}

/// Issue one code per student and rewrite book ownership in terms of codes.
/// Source order is kept for both lists.
pub fn anonymize<R: Rng>(
    students: Vec<SourceStudent>,
    books: Vec<SourceBook>,
    codes: &mut CodeAllocator<R>,
) -> Result<ExtractedData> {
    let mut code_by_id: HashMap<i64, String> = HashMap::with_capacity(students.len());
    let mut anonymized_students = Vec::with_capacity(students.len());

    for student in students {
        let student_code = codes
            .allocate()
            .ok_or_else(|| LedgerError::CodeSpaceExhausted {
                issued: codes.issued_count(),
            })?;
        code_by_id.insert(student.id, student_code.clone());
        anonymized_students.push(AnonymizedStudent {
            old_id: student.id,
            name: student.name,
            student_code,
        });
    }

    let anonymized_books = books
        .into_iter()
        .map(|book| AnonymizedBook {
            student_code: book
                .student_id
                .as_whole_integer()
                .and_then(|id| code_by_id.get(&id).cloned()),
            checking: book.checking.is_one(),
            input_date: book.input_date,
            book_name: book.book_name,
            price: book.price,
            payment_date: book.payment_date,
        })
        .collect();

    Ok(ExtractedData {
        students: anonymized_students,
        books: anonymized_books,
    })
}

/// Serialize with four-space indentation, non-ASCII text kept literal.
/// Any existing file is truncated first.
pub fn write_document(output_path: &Path, data: &ExtractedData) -> Result<()> {
    let file = File::create(output_path).map_err(|e| LedgerError::io(output_path, e))?;
    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    data.serialize(&mut serializer)?;
    writer.flush().map_err(|e| LedgerError::io(output_path, e))?;
    Ok(())
}

/// Read both tables, anonymize and write the document to `output_path`
pub fn extract_data<R: Rng>(db_path: &Path, output_path: &Path, rng: R) -> Result<ExtractedData> {
    let db = SyncDb::open_readonly(db_path)?;
    let snapshot = read_students(&db)
        .and_then(|students| Ok((students, read_books(&db)?)));
    db.close();
    let (students, books) = snapshot?;
    debug!("Read {} students and {} books", students.len(), books.len());

    let mut codes = CodeAllocator::with_rng(rng);
    let data = anonymize(students, books, &mut codes)?;

    write_document(output_path, &data)?;
    info!(
        "Wrote {} students and {} books to {}",
        data.students.len(),
        data.books.len(),
        output_path.display()
    );
    Ok(data)
}
