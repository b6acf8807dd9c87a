use sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, SqliteQueryBuilder, Table};

use crate::schema::{Books, Students};

/// DROP TABLE IF EXISTS books
pub fn drop_books_table() -> String {
    Table::drop()
        .table(Books::Table)
        .if_exists()
        .to_string(SqliteQueryBuilder)
}

/// DROP TABLE IF EXISTS students
pub fn drop_students_table() -> String {
    Table::drop()
        .table(Students::Table)
        .if_exists()
        .to_string(SqliteQueryBuilder)
}

/// CREATE TABLE IF NOT EXISTS students (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL UNIQUE,
///     student_code TEXT NOT NULL UNIQUE
/// )
pub fn create_students_table() -> String {
    Table::create()
        .table(Students::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Students::Id)
                .integer()
                .primary_key()
                .auto_increment(),
        )
        .col(ColumnDef::new(Students::Name).text().not_null().unique_key())
        .col(
            ColumnDef::new(Students::StudentCode)
                .text()
                .not_null()
                .unique_key(),
        )
        .to_string(SqliteQueryBuilder)
}

/// CREATE TABLE IF NOT EXISTS books (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     input_date TEXT NOT NULL,
///     book_name TEXT NOT NULL,
///     price INTEGER NOT NULL,
///     checking BOOLEAN NOT NULL DEFAULT FALSE,
///     payment_date TEXT,
///     student_id INTEGER REFERENCES students(id) ON DELETE SET NULL
/// )
pub fn create_books_table() -> String {
    Table::create()
        .table(Books::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Books::Id)
                .integer()
                .primary_key()
                .auto_increment(),
        )
        .col(ColumnDef::new(Books::InputDate).text().not_null())
        .col(ColumnDef::new(Books::BookName).text().not_null())
        .col(ColumnDef::new(Books::Price).integer().not_null())
        .col(
            ColumnDef::new(Books::Checking)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(Books::PaymentDate).text())
        .col(ColumnDef::new(Books::StudentId).integer())
        .foreign_key(
            ForeignKey::create()
                .from(Books::Table, Books::StudentId)
                .to(Students::Table, Students::Id)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .to_string(SqliteQueryBuilder)
}
