//! Runtime values flowing between resolvers, coercions and the execution
//! engine.

mod object;
mod scalar;

use std::fmt;

use arcstr::ArcStr;

pub use self::{object::Object, scalar::ScalarValue};

/// Serializable value returned from query and field execution.
///
/// Used by resolvers and scalar coercions. Object values may carry a model
/// tag, see [`Object::model_name`].
#[derive(Clone, Debug, Default, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum Value {
    #[default]
    Null,
    Scalar(ScalarValue),
    List(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Construct a null value.
    pub fn null() -> Self {
        Self::Null
    }

    /// Construct a list value.
    pub fn list(l: Vec<Self>) -> Self {
        Self::List(l)
    }

    /// Construct an object value.
    pub fn object(o: Object) -> Self {
        Self::Object(o)
    }

    /// Construct a scalar value
    pub fn scalar<T>(s: T) -> Self
    where
        ScalarValue: From<T>,
    {
        Self::Scalar(s.into())
    }

    /// Does this value represent null?
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// View the underlying scalar value if present
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// View the underlying object value, if present.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// View the underlying list value, if present.
    pub fn as_list(&self) -> Option<&Vec<Self>> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// The host model name this value was tagged with.
    ///
    /// Only object values can carry a tag.
    pub fn model_name(&self) -> Option<&ArcStr> {
        self.as_object().and_then(Object::model_name)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Scalar(ScalarValue::String(s)) => {
                f.write_str("\"")?;
                crate::ast::write_escaped(f, s)?;
                f.write_str("\"")
            }
            Self::Scalar(s) => s.fmt(f),
            Self::List(list) => {
                write!(f, "[")?;
                for (idx, item) in list.iter().enumerate() {
                    write!(f, "{item}")?;
                    if idx < list.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "]")
            }
            Self::Object(obj) => {
                if let Some(model) = obj.model_name() {
                    write!(f, "{model} ")?;
                }
                write!(f, "{{")?;
                for (idx, (key, value)) in obj.iter().enumerate() {
                    write!(f, "\"{key}\": {value}")?;
                    if idx < obj.field_count() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "}}")
            }
        }
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::scalar(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::scalar(s)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::scalar(i)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::scalar(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::scalar(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::scalar(b)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Self::Object(o)
    }
}
