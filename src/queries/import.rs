use sea_query::{Query, SimpleExpr, SqliteQueryBuilder};

use crate::extract::AnonymizedBook;
use crate::schema::{Books, Students};
use crate::value::SqlValue;

/// INSERT INTO students (name, student_code) VALUES (?, ?)
pub fn insert_student(name: Option<&str>, student_code: &str) -> String {
    Query::insert()
        .into_table(Students::Table)
        .columns([Students::Name, Students::StudentCode])
        .values_panic([name.map(str::to_string).into(), student_code.into()])
        .to_string(SqliteQueryBuilder)
}

/// INSERT INTO books (input_date, book_name, price, checking, payment_date, student_id)
/// VALUES (?, ?, ?, ?, ?, ?)
pub fn insert_book(book: &AnonymizedBook, student_id: i64) -> String {
    let value = |v: &SqlValue| -> SimpleExpr { sea_query::Value::from(v).into() };
    Query::insert()
        .into_table(Books::Table)
        .columns([
            Books::InputDate,
            Books::BookName,
            Books::Price,
            Books::Checking,
            Books::PaymentDate,
            Books::StudentId,
        ])
        .values_panic([
            value(&book.input_date),
            value(&book.book_name),
            value(&book.price),
            i32::from(book.checking).into(),
            value(&book.payment_date),
            student_id.into(),
        ])
        .to_string(SqliteQueryBuilder)
}
