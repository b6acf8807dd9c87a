pub mod book;
pub mod ddl;
pub mod import;
pub mod student;
