/// Source database used when nothing else is configured
pub const DEFAULT_DB_PATH: &str = "./mclassbookstore.db";

/// Extracted JSON document written by the extract command
pub const DEFAULT_OUTPUT_PATH: &str = "./extracted_data.json";

/// Database populated by the import command
pub const DEFAULT_IMPORT_TARGET_PATH: &str = "./database.sqlite";

/// Inclusive bounds of generated student codes (always 8 digits)
pub const STUDENT_CODE_MIN: u32 = 10_000_000;
pub const STUDENT_CODE_MAX: u32 = 99_999_999;

/// Number of book rows shown in the report's sample section
pub const SAMPLE_ROW_LIMIT: u64 = 5;

/// Indentation used for the extracted JSON document
pub const JSON_INDENT: &[u8] = b"    ";
