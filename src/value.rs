//! Loosely typed SQLite column values
//!
//! Columns such as `price`, `checking` and the date fields of the ledger do not
//! hold a single storage class. `SqlValue` keeps whatever SQLite returned and
//! hands it on unchanged to the report and to the JSON document.

use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Decode, Type, TypeInfo, ValueRef};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    /// Numeric equality with an integer; text never matches
    pub fn equals_int(&self, n: i64) -> bool {
        match self {
            SqlValue::Integer(i) => *i == n,
            SqlValue::Real(f) => *f == n as f64,
            SqlValue::Null | SqlValue::Text(_) => false,
        }
    }

    /// True iff the value is exactly 1 (the "paid" flag)
    pub fn is_one(&self) -> bool {
        self.equals_int(1)
    }

    /// Integer value, also for reals without a fractional part (`1.0` -> 1)
    pub fn as_whole_integer(&self) -> Option<i64> {
        match self {
            SqlValue::Integer(i) => Some(*i),
            SqlValue::Real(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    /// Render as a literal, quoting text
    pub fn to_literal(&self) -> String {
        match self {
            SqlValue::Text(s) => format!("{:?}", s),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Integer(i) => write!(f, "{}", i),
            SqlValue::Real(v) => write!(f, "{}", v),
            SqlValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&SqlValue> for sea_query::Value {
    fn from(value: &SqlValue) -> Self {
        match value {
            SqlValue::Null => Option::<String>::None.into(),
            SqlValue::Integer(i) => (*i).into(),
            SqlValue::Real(v) => (*v).into(),
            SqlValue::Text(s) => s.clone().into(),
        }
    }
}

impl Type<Sqlite> for SqlValue {
    fn type_info() -> SqliteTypeInfo {
        <str as Type<Sqlite>>::type_info()
    }

    // Any storage class decodes into some variant
    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}

impl<'r> Decode<'r, Sqlite> for SqlValue {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(SqlValue::Null);
        }
        let storage = value.type_info().name().to_owned();
        match storage.as_str() {
            "INTEGER" | "BOOLEAN" => {
                Ok(SqlValue::Integer(<i64 as Decode<Sqlite>>::decode(value)?))
            }
            "REAL" | "NUMERIC" => Ok(SqlValue::Real(<f64 as Decode<Sqlite>>::decode(value)?)),
            // Only UTF-8 blobs can be passed on as text
            "BLOB" => {
                let bytes = <Vec<u8> as Decode<Sqlite>>::decode(value)?;
                Ok(SqlValue::Text(String::from_utf8(bytes)?))
            }
            _ => Ok(SqlValue::Text(<String as Decode<Sqlite>>::decode(value)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_one_only_for_exact_one() {
        assert!(SqlValue::Integer(1).is_one());
        assert!(SqlValue::Real(1.0).is_one());
        assert!(!SqlValue::Integer(0).is_one());
        assert!(!SqlValue::Integer(5).is_one());
        assert!(!SqlValue::Null.is_one());
        assert!(!SqlValue::Text("1".to_string()).is_one());
    }

    #[test]
    fn test_whole_integer_accepts_integral_reals() {
        assert_eq!(SqlValue::Integer(7).as_whole_integer(), Some(7));
        assert_eq!(SqlValue::Real(1.0).as_whole_integer(), Some(1));
        assert_eq!(SqlValue::Real(1.5).as_whole_integer(), None);
        assert_eq!(SqlValue::Real(f64::NAN).as_whole_integer(), None);
        assert_eq!(SqlValue::Text("1".to_string()).as_whole_integer(), None);
        assert_eq!(SqlValue::Null.as_whole_integer(), None);
    }

    #[test]
    fn test_json_shape_is_untagged() {
        let values = vec![
            SqlValue::Null,
            SqlValue::Integer(12000),
            SqlValue::Real(9.5),
            SqlValue::Text("2024-03-01".to_string()),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,12000,9.5,"2024-03-01"]"#);

        let decoded: Vec<SqlValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn test_literal_quotes_text_only() {
        assert_eq!(SqlValue::Text("Math".to_string()).to_literal(), "\"Math\"");
        assert_eq!(SqlValue::Integer(3).to_literal(), "3");
        assert_eq!(SqlValue::Null.to_literal(), "NULL");
    }
}
