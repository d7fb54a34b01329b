use std::fmt;

use derive_more::with_trait::From;
use serde::{Deserialize, Serialize};

/// The scalar value carried by runtime [`Value`]s and schema literals.
///
/// Integers are stored as `i64`, wide enough for every built-in integral
/// scalar (`Byte`, `Short`, `Int`, `Long`); range checks belong to the
/// coercions of the concrete scalar type.
///
/// [`Value`]: super::Value
#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// [`Int`][0] value.
    ///
    /// [0]: https://spec.graphql.org/October2021#sec-Int
    Int(i64),

    /// [`Float`][0] value.
    ///
    /// [0]: https://spec.graphql.org/October2021#sec-Float
    Float(f64),

    /// [`String`][0] value.
    ///
    /// [0]: https://spec.graphql.org/October2021#sec-String
    String(String),

    /// [`Boolean`][0] value.
    ///
    /// [0]: https://spec.graphql.org/October2021#sec-Boolean
    Boolean(bool),
}

impl ScalarValue {
    /// Represents this [`ScalarValue`] as an integer value, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Represents this [`ScalarValue`] as a float value.
    ///
    /// Integers are widened, as every `Int` literal is a valid `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Represents this [`ScalarValue`] as a string slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Represents this [`ScalarValue`] as a boolean value, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<i32> for ScalarValue {
    fn from(i: i32) -> Self {
        Self::Int(i.into())
    }
}

/// Natural textual form; strings are written raw, floats always keep a
/// fractional part or an exponent so they never read back as integers.
impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
