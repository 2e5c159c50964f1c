//! Dynamically-typed field input accepted by contract setters.
//!
//! # Responsibility
//! - Carry caller-supplied values whose runtime kind is checked on assignment.
//! - Name runtime kinds for `TypeMismatch` diagnostics.
//!
//! # Invariants
//! - `kind()` is total: every value maps to exactly one `ValueKind`.
//! - No conversion ever coerces between kinds (`Float` is never an integer,
//!   `Bool` is never an integer).

use crate::model::author::Author;
use crate::model::book::Book;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Runtime kind of a `FieldValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Author,
    Book,
    Text,
    Integer,
    Float,
    Bool,
    Null,
}

impl ValueKind {
    /// Stable lowercase name used in error messages and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Book => "book",
            Self::Text => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Null => "null",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value offered to a validated contract field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Author(Arc<Author>),
    Book(Arc<Book>),
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Author(_) => ValueKind::Author,
            Self::Book(_) => ValueKind::Book,
            Self::Text(_) => ValueKind::Text,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
            Self::Null => ValueKind::Null,
        }
    }
}

impl From<Arc<Author>> for FieldValue {
    fn from(value: Arc<Author>) -> Self {
        Self::Author(value)
    }
}

impl From<&Arc<Author>> for FieldValue {
    fn from(value: &Arc<Author>) -> Self {
        Self::Author(Arc::clone(value))
    }
}

impl From<Arc<Book>> for FieldValue {
    fn from(value: Arc<Book>) -> Self {
        Self::Book(value)
    }
}

impl From<&Arc<Book>> for FieldValue {
    fn from(value: &Arc<Book>) -> Self {
        Self::Book(Arc::clone(value))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

macro_rules! integer_field_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

// Only widths that fit an `i64` losslessly; `u64` and `usize` are left out.
integer_field_value!(i8, i16, i32, u8, u16, u32);

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldValue, ValueKind};
    use crate::model::author::Author;
    use std::sync::Arc;

    #[test]
    fn conversions_keep_their_runtime_kind() {
        let author = Arc::new(Author::new("Jane"));
        assert_eq!(FieldValue::from(&author).kind(), ValueKind::Author);
        assert_eq!(FieldValue::from("2023-01-01").kind(), ValueKind::Text);
        assert_eq!(FieldValue::from(100_i64).kind(), ValueKind::Integer);
        assert_eq!(FieldValue::from(100).kind(), ValueKind::Integer);
        assert_eq!(FieldValue::from(1.5).kind(), ValueKind::Float);
        assert_eq!(FieldValue::from(true).kind(), ValueKind::Bool);
        assert_eq!(FieldValue::from(None::<i64>).kind(), ValueKind::Null);
    }

    #[test]
    fn narrow_numbers_keep_their_kind_and_value() {
        assert_eq!(FieldValue::from(7_u8), FieldValue::Integer(7));
        assert_eq!(FieldValue::from(-7_i8), FieldValue::Integer(-7));
        assert_eq!(FieldValue::from(60_000_u16), FieldValue::Integer(60_000));
        assert_eq!(FieldValue::from(-30_000_i16), FieldValue::Integer(-30_000));
        assert_eq!(FieldValue::from(u32::MAX), FieldValue::Integer(4_294_967_295));
        assert_eq!(FieldValue::from(2.5_f32), FieldValue::Float(2.5));
    }

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(ValueKind::Text.to_string(), "string");
        assert_eq!(ValueKind::Integer.as_str(), "integer");
    }
}
