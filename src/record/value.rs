//! Typed attribute values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use strum_macros::{Display, IntoStaticStr};

/// A single attribute value read from a record.
///
/// Each variant has exactly one rendering rule (see `dump::format`).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String or text column
    String(String),
    /// Integer column
    Integer(i64),
    /// Floating-point column
    Float(f64),
    /// Arbitrary-precision decimal, kept in its textual form
    Decimal(String),
    /// Timestamp without timezone
    DateTime(NaiveDateTime),
    /// Time of day
    Time(NaiveTime),
    /// Calendar date
    Date(NaiveDate),
    /// Raw bytes
    Binary(Vec<u8>),
    /// Boolean column
    Boolean(bool),
    /// NULL
    Null,
}

impl Value {
    /// Check if the value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Kind of the value, or `None` for NULL.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::String(_) => Some(ValueKind::String),
            Value::Integer(_) => Some(ValueKind::Integer),
            Value::Float(_) => Some(ValueKind::Float),
            Value::Decimal(_) => Some(ValueKind::Decimal),
            Value::DateTime(_) => Some(ValueKind::DateTime),
            Value::Time(_) => Some(ValueKind::Time),
            Value::Date(_) => Some(ValueKind::Date),
            Value::Binary(_) => Some(ValueKind::Binary),
            Value::Boolean(_) => Some(ValueKind::Boolean),
            Value::Null => None,
        }
    }

    /// Name of the value's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().map_or("null", |kind| kind.as_str())
    }
}

/// Semantic column types a record source can produce.
///
/// Displays as its lowercase name (`datetime`), as used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    /// String or text
    String,
    /// Integer
    Integer,
    /// Floating point
    Float,
    /// Decimal kept as text
    Decimal,
    /// Timestamp without timezone
    DateTime,
    /// Time of day
    Time,
    /// Calendar date
    Date,
    /// Raw bytes
    Binary,
    /// Boolean
    Boolean,
}

impl ValueKind {
    /// Lowercase type name, as used in error messages.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Value::Time(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Binary(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_lowercase() {
        assert_eq!(ValueKind::String.as_str(), "string");
        assert_eq!(ValueKind::DateTime.as_str(), "datetime");
        assert_eq!(ValueKind::Boolean.as_str(), "boolean");
        assert_eq!(ValueKind::Decimal.to_string(), "decimal");
        assert_eq!(Value::Binary(Vec::new()).type_name(), "binary");
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Value::from("x").kind(), Some(ValueKind::String));
        assert_eq!(Value::from(42i64).kind(), Some(ValueKind::Integer));
        assert_eq!(Value::Decimal("2.72".into()).kind(), Some(ValueKind::Decimal));
        assert_eq!(Value::from(false).kind(), Some(ValueKind::Boolean));
        assert_eq!(Value::Null.kind(), None);
        assert_eq!(Value::Null.type_name(), "null");
    }

    #[test]
    fn test_option_conversion() {
        assert!(Value::from(None::<i64>).is_null());
        assert_eq!(Value::from(Some("a")), Value::String("a".to_string()));
    }
}
