use sea_query::{Query, SqliteQueryBuilder};

use crate::schema::Student;

/// SELECT id, name FROM student
pub fn select_all() -> String {
    Query::select()
        .columns([Student::Id, Student::Name])
        .from(Student::Table)
        .to_string(SqliteQueryBuilder)
}
