#![allow(dead_code)]

use sea_query::{ColumnDef, Query, SqliteQueryBuilder, Table};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

use bookstore_ledger::schema::{Book, Student};

/// One `book` row; `checking` and `student_id` may be NULL
pub struct BookRow {
    pub input_date: &'static str,
    pub book_name: &'static str,
    pub price: i64,
    pub checking: Option<i64>,
    pub student_id: Option<i64>,
    pub payment_date: Option<&'static str>,
}

pub fn book_row(
    book_name: &'static str,
    checking: Option<i64>,
    student_id: Option<i64>,
) -> BookRow {
    BookRow {
        input_date: "2024-03-02",
        book_name,
        price: 12000,
        checking,
        student_id,
        payment_date: if checking == Some(1) {
            Some("2024-03-15")
        } else {
            None
        },
    }
}

fn create_student_table() -> String {
    Table::create()
        .table(Student::Table)
        .col(ColumnDef::new(Student::Id).integer().primary_key())
        .col(ColumnDef::new(Student::Name).text().not_null())
        .to_string(SqliteQueryBuilder)
}

fn create_book_table() -> String {
    Table::create()
        .table(Book::Table)
        .col(ColumnDef::new(Book::InputDate).text())
        .col(ColumnDef::new(Book::BookName).text())
        .col(ColumnDef::new(Book::Price).integer())
        .col(ColumnDef::new(Book::Checking).integer())
        .col(ColumnDef::new(Book::StudentId).integer())
        .col(ColumnDef::new(Book::PaymentDate).text())
        .to_string(SqliteQueryBuilder)
}

/// Create `mclassbookstore.db` inside `dir` holding the given rows
pub fn create_ledger_database(
    dir: &Path,
    students: &[(i64, &str)],
    books: &[BookRow],
) -> PathBuf {
    let db_path = dir.join("mclassbookstore.db");
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();

        for sql in [create_student_table(), create_book_table()] {
            sqlx::query(&sql).execute(&pool).await.unwrap();
        }

        for (id, name) in students {
            let sql = Query::insert()
                .into_table(Student::Table)
                .columns([Student::Id, Student::Name])
                .values_panic([(*id).into(), (*name).into()])
                .to_string(SqliteQueryBuilder);
            sqlx::query(&sql).execute(&pool).await.unwrap();
        }

        for book in books {
            let sql = Query::insert()
                .into_table(Book::Table)
                .columns([
                    Book::InputDate,
                    Book::BookName,
                    Book::Price,
                    Book::Checking,
                    Book::StudentId,
                    Book::PaymentDate,
                ])
                .values_panic([
                    book.input_date.into(),
                    book.book_name.into(),
                    book.price.into(),
                    book.checking.into(),
                    book.student_id.into(),
                    book.payment_date.map(str::to_string).into(),
                ])
                .to_string(SqliteQueryBuilder);
            sqlx::query(&sql).execute(&pool).await.unwrap();
        }

        pool.close().await;
    });
    db_path
}

/// Count rows of a table in an arbitrary database file
pub fn count_rows(db_path: &Path, table: &str) -> i64 {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let options = SqliteConnectOptions::new().filename(db_path);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&pool)
            .await
            .unwrap();
        pool.close().await;
        count
    })
}

/// Create a valid SQLite file with no tables
pub fn create_empty_database(db_path: &Path) {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();
        pool.close().await;
    });
}

/// Create `mclassbookstore.db` with untyped columns, so every value keeps the
/// storage class it was inserted with, then run the given INSERT statements
pub fn create_untyped_ledger_database(dir: &Path, inserts: &[&str]) -> PathBuf {
    let db_path = dir.join("mclassbookstore.db");
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();

        let tables = [
            "CREATE TABLE student (id, name)",
            "CREATE TABLE book (input_date, book_name, price, checking, student_id, payment_date)",
        ];
        for sql in tables.iter().chain(inserts) {
            sqlx::query(sql).execute(&pool).await.unwrap();
        }

        pool.close().await;
    });
    db_path
}
