use sea_query::{Alias, Expr, Query, SqliteQueryBuilder};

use crate::schema::Book;

/// Column listing of the book table, in declaration order
pub const TABLE_INFO: &str = "PRAGMA table_info(book)";

/// SELECT checking, COUNT(*) AS book_count FROM book GROUP BY checking
pub fn count_by_checking() -> String {
    Query::select()
        .column(Book::Checking)
        .expr_as(Expr::cust("COUNT(*)"), Alias::new("book_count"))
        .from(Book::Table)
        .group_by_col(Book::Checking)
        .to_string(SqliteQueryBuilder)
}

/// SELECT book_name, price, checking, payment_date FROM book LIMIT ?
pub fn select_samples(limit: u64) -> String {
    Query::select()
        .columns([
            Book::BookName,
            Book::Price,
            Book::Checking,
            Book::PaymentDate,
        ])
        .from(Book::Table)
        .limit(limit)
        .to_string(SqliteQueryBuilder)
}

/// SELECT input_date, book_name, price, checking, student_id, payment_date FROM book
pub fn select_all() -> String {
    Query::select()
        .columns([
            Book::InputDate,
            Book::BookName,
            Book::Price,
            Book::Checking,
            Book::StudentId,
            Book::PaymentDate,
        ])
        .from(Book::Table)
        .to_string(SqliteQueryBuilder)
}
