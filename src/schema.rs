use sea_query::Iden;

/// Student table of the source ledger
#[derive(Iden)]
pub enum Student {
    Table,
    Id,
    Name,
}

/// Book table of the source ledger - one row per book handed to a student
#[derive(Iden)]
pub enum Book {
    Table,
    InputDate,
    BookName,
    Price,
    Checking,
    StudentId,
    PaymentDate,
}

/// Students table of the import target, keyed by public code
#[derive(Iden)]
pub enum Students {
    Table,
    Id,
    Name,
    StudentCode,
}

/// Books table of the import target
#[derive(Iden)]
pub enum Books {
    Table,
    Id,
    InputDate,
    BookName,
    Price,
    Checking,
    PaymentDate,
    StudentId,
}
