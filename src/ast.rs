use std::fmt;

use arcstr::ArcStr;
use indexmap::IndexMap;

use crate::value::{Object, ScalarValue, Value};

/// A type literal of the schema
///
/// This enum carries no semantic information and might refer to types that do
/// not exist. References are resolved by name when the schema is frozen.
#[derive(Clone, Eq, Hash, PartialEq, Debug)]
pub enum Type {
    /// A nullable named type, e.g. `String`
    Named(ArcStr),
    /// A nullable list type, e.g. `[String]`
    ///
    /// The list itself is what's nullable, the containing type might be non-null.
    List(Box<Type>),
    /// A non-null named type, e.g. `String!`
    NonNullNamed(ArcStr),
    /// A non-null list type, e.g. `[String]!`.
    ///
    /// The list itself is what's non-null, the containing type might be null.
    NonNullList(Box<Type>),
}

impl Type {
    /// Get the name of a named type.
    ///
    /// Only applies to named types; lists will return `None`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(n) | Self::NonNullNamed(n) => Some(n),
            _ => None,
        }
    }

    /// Get the innermost name by unpacking lists
    ///
    /// All type literals contain exactly one named type.
    pub fn innermost_name(&self) -> &ArcStr {
        match self {
            Self::Named(n) | Self::NonNullNamed(n) => n,
            Self::List(l) | Self::NonNullList(l) => l.innermost_name(),
        }
    }

    /// Determines if a type only can represent non-null values.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNullNamed(_) | Self::NonNullList(_))
    }

    /// Wraps this type into its non-null form.
    ///
    /// Already non-null types are returned unchanged.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            Self::Named(n) => Self::NonNullNamed(n),
            Self::List(l) => Self::NonNullList(l),
            t => t,
        }
    }

    /// Strips the outermost non-null marker, if any.
    #[must_use]
    pub fn nullable(self) -> Self {
        match self {
            Self::NonNullNamed(n) => Self::Named(n),
            Self::NonNullList(l) => Self::List(l),
            t => t,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::NonNullNamed(n) => write!(f, "{n}!"),
            Self::List(t) => write!(f, "[{t}]"),
            Self::NonNullList(t) => write!(f, "[{t}]!"),
        }
    }
}

/// A constant literal of the schema language.
///
/// Used for default values of arguments and input fields, for the bound
/// arguments of directive applications, and as the parsed-literal input of
/// scalar coercions.
#[derive(Clone, Debug, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum InputValue {
    Null,
    Scalar(ScalarValue),
    Enum(String),
    List(Vec<InputValue>),
    Object(IndexMap<String, InputValue>),
}

impl InputValue {
    /// Construct a `null` value.
    pub fn null() -> Self {
        Self::Null
    }

    /// Construct a scalar value
    pub fn scalar<T>(v: T) -> Self
    where
        ScalarValue: From<T>,
    {
        Self::Scalar(v.into())
    }

    /// Construct an enum value.
    pub fn enum_value<T: AsRef<str>>(s: T) -> Self {
        Self::Enum(s.as_ref().into())
    }

    /// Construct a list value.
    pub fn list(l: Vec<Self>) -> Self {
        Self::List(l)
    }

    /// Construct an object value.
    pub fn object<K>(o: IndexMap<K, Self>) -> Self
    where
        K: Into<String>,
    {
        Self::Object(o.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Does the value represent a `null`?
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// View the underlying scalar value, if present.
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// View the underlying enum value, if present.
    pub fn as_enum_value(&self) -> Option<&str> {
        match self {
            Self::Enum(e) => Some(e.as_str()),
            _ => None,
        }
    }

    /// Normalizes this literal into a plain runtime [`Value`].
    ///
    /// Enum literals become their string name, objects lose nothing but
    /// carry no model tag.
    pub fn to_plain_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Scalar(s) => Value::Scalar(s.clone()),
            Self::Enum(e) => Value::scalar(e.as_str()),
            Self::List(l) => Value::list(l.iter().map(Self::to_plain_value).collect()),
            Self::Object(o) => Value::Object(
                o.iter()
                    .map(|(k, v)| (k.as_str(), v.to_plain_value()))
                    .collect::<Object>(),
            ),
        }
    }
}

impl<T> From<Option<T>> for InputValue
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

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        Self::scalar(s)
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        Self::scalar(s)
    }
}

impl From<i32> for InputValue {
    fn from(i: i32) -> Self {
        Self::scalar(i64::from(i))
    }
}

impl From<i64> for InputValue {
    fn from(i: i64) -> Self {
        Self::scalar(i)
    }
}

impl From<f64> for InputValue {
    fn from(f: f64) -> Self {
        Self::scalar(f)
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        Self::scalar(b)
    }
}

/// Renders the value in schema language literal form.
impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Scalar(ScalarValue::String(s)) => {
                f.write_str("\"")?;
                write_escaped(f, s)?;
                f.write_str("\"")
            }
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Enum(v) => write!(f, "{v}"),
            Self::List(v) => {
                write!(f, "[")?;
                for (i, spanning) in v.iter().enumerate() {
                    spanning.fmt(f)?;
                    if i < v.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "]")
            }
            Self::Object(o) => {
                write!(f, "{{")?;
                for (i, (k, v)) in o.iter().enumerate() {
                    write!(f, "{k}: ")?;
                    v.fmt(f)?;
                    if i < o.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "}}")
            }
        }
    }
}

/// Writes `s` escaping backslashes, quotes and line breaks.
pub(crate) fn write_escaped(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use crate::value::Value;

    use super::{InputValue, Type};

    #[test]
    fn test_type_display() {
        let t = Type::NonNullList(Box::new(Type::Named("Int".into())));
        assert_eq!(t.to_string(), "[Int]!");
        assert_eq!(t.innermost_name(), "Int");
        assert!(t.is_non_null());
        assert_eq!(t.nullable().to_string(), "[Int]");
    }

    #[test]
    fn test_input_value_fmt() {
        let value: InputValue = InputValue::null();
        assert_eq!(value.to_string(), "null");

        let value = InputValue::scalar(123_i64);
        assert_eq!(value.to_string(), "123");

        let value = InputValue::scalar(12.3);
        assert_eq!(value.to_string(), "12.3");

        let value = InputValue::scalar(1.0);
        assert_eq!(value.to_string(), "1.0");

        let value = InputValue::scalar("FOO");
        assert_eq!(value.to_string(), "\"FOO\"");

        let value = InputValue::scalar(true);
        assert_eq!(value.to_string(), "true");

        let value = InputValue::enum_value("BAR");
        assert_eq!(value.to_string(), "BAR");

        let list = vec![InputValue::scalar(1_i64), InputValue::scalar(2_i64)];
        let value = InputValue::list(list);
        assert_eq!(value.to_string(), "[1, 2]");

        let object = IndexMap::from([
            ("foo", InputValue::scalar(1_i64)),
            ("bar", InputValue::scalar(2_i64)),
        ]);
        let value = InputValue::object(object);
        assert_eq!(value.to_string(), "{foo: 1, bar: 2}");
    }

    #[test]
    fn escapes_string_literals() {
        let value = InputValue::scalar("say \"hi\"\\\nbye");
        assert_eq!(value.to_string(), r#""say \"hi\"\\\nbye""#);
    }

    #[test]
    fn literal_normalizes_to_plain_value() {
        let literal = InputValue::list(vec![
            InputValue::enum_value("RED"),
            InputValue::object(IndexMap::from([("x", InputValue::scalar(1_i64))])),
        ]);

        let plain = literal.to_plain_value();
        let Value::List(items) = plain else {
            panic!("expected a list");
        };
        assert_eq!(items[0], Value::scalar("RED"));
        assert_eq!(
            items[1].as_object().and_then(|o| o.get_field_value("x")),
            Some(&Value::scalar(1_i64)),
        );
    }
}
