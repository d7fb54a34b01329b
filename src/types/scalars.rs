//! Built-in scalar types and their coercions.
//!
//! Every schema carries these scalars whether or not its types reference
//! them. Their names cannot be declared again.

use arcstr::ArcStr;

use crate::{
    schema::{
        code_registry::{BoxError, CoercionError, ScalarCoercion},
        meta::ScalarMeta,
    },
    value::{ScalarValue, Value},
};

/// Names and descriptions of the built-in scalars, in registration order.
pub const BUILTIN_SCALARS: [(&str, &str); 11] = [
    ("Boolean", "Built-in Boolean"),
    ("Byte", "Built-in Byte as Int"),
    ("Short", "Built-in Short as Int"),
    ("Int", "Built-in Int"),
    ("Long", "Long type"),
    ("BigInteger", "Built-in java.math.BigInteger"),
    ("Float", "Built-in Float"),
    ("BigDecimal", "Built-in java.math.BigDecimal"),
    ("Char", "Built-in Char as Character"),
    ("String", "Built-in String"),
    ("ID", "Built-in ID"),
];

/// Checks whether `name` is one of the [`BUILTIN_SCALARS`].
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.iter().any(|(n, _)| *n == name)
}

/// Metadata of the built-in scalar `name`.
pub fn builtin_meta(name: &str) -> Option<ScalarMeta> {
    let (name, description) = BUILTIN_SCALARS.iter().find(|(n, _)| *n == name)?;
    Some(ScalarMeta::new(ArcStr::from(*name)).description(ArcStr::from(*description)))
}

/// Coercion of the built-in scalar `name`.
pub fn builtin_coercion(name: &str) -> Option<ScalarCoercion> {
    let scalar = ArcStr::from(name);
    let coercion = match name {
        "Boolean" => ScalarCoercion::new(scalar, coerce_boolean, coerce_boolean),
        "Byte" => ScalarCoercion::new(
            scalar,
            |v| coerce_integer(v, "Byte", i8::MIN.into(), i8::MAX.into()),
            |v| coerce_integer(v, "Byte", i8::MIN.into(), i8::MAX.into()),
        ),
        "Short" => ScalarCoercion::new(
            scalar,
            |v| coerce_integer(v, "Short", i16::MIN.into(), i16::MAX.into()),
            |v| coerce_integer(v, "Short", i16::MIN.into(), i16::MAX.into()),
        ),
        "Int" => ScalarCoercion::new(
            scalar,
            |v| coerce_integer(v, "Int", i32::MIN.into(), i32::MAX.into()),
            |v| coerce_integer(v, "Int", i32::MIN.into(), i32::MAX.into()),
        ),
        "Long" => ScalarCoercion::new(
            scalar,
            |v| coerce_integer(v, "Long", i64::MIN, i64::MAX),
            |v| coerce_integer(v, "Long", i64::MIN, i64::MAX),
        ),
        "BigInteger" => ScalarCoercion::new(scalar, coerce_big_integer, coerce_big_integer),
        "Float" => ScalarCoercion::new(scalar, coerce_float, coerce_float),
        "BigDecimal" => ScalarCoercion::new(scalar, coerce_big_decimal, coerce_big_decimal),
        "Char" => ScalarCoercion::new(scalar, coerce_char, coerce_char),
        "String" => ScalarCoercion::new(scalar, serialize_string, parse_string),
        "ID" => ScalarCoercion::new(scalar, coerce_id, coerce_id),
        _ => return None,
    };
    Some(coercion)
}

fn invalid(expected: &str, v: &Value) -> BoxError {
    CoercionError::invalid(format!("Expected type '{expected}' but was {v}")).into()
}

fn coerce_boolean(v: &Value) -> Result<Value, BoxError> {
    match v.as_scalar() {
        Some(ScalarValue::Boolean(b)) => Ok(Value::scalar(*b)),
        _ => Err(invalid("Boolean", v)),
    }
}

fn coerce_integer(v: &Value, name: &str, min: i64, max: i64) -> Result<Value, BoxError> {
    let out_of_range = || -> BoxError {
        CoercionError::invalid(format!("Value {v} is out of range for '{name}' ({min}..={max})")).into()
    };
    let i = match v.as_scalar() {
        Some(ScalarValue::Int(i)) => *i,
        // `max as f64` rounds up to the next power of two for `i64::MAX`.
        Some(ScalarValue::Float(f)) if f.fract() == 0.0 => {
            if *f < min as f64 || *f >= max as f64 + 1.0 {
                return Err(out_of_range());
            }
            *f as i64
        }
        _ => return Err(invalid(name, v)),
    };
    if (min..=max).contains(&i) {
        Ok(Value::scalar(i))
    } else {
        Err(out_of_range())
    }
}

fn coerce_big_integer(v: &Value) -> Result<Value, BoxError> {
    match v.as_scalar() {
        Some(ScalarValue::Int(i)) => Ok(Value::scalar(*i)),
        Some(ScalarValue::String(s)) if is_integer_literal(s) => Ok(match s.parse::<i64>() {
            Ok(i) => Value::scalar(i),
            Err(_) => Value::scalar(s.as_str()),
        }),
        _ => Err(invalid("BigInteger", v)),
    }
}

fn coerce_float(v: &Value) -> Result<Value, BoxError> {
    v.as_scalar()
        .and_then(ScalarValue::as_float)
        .map(Value::scalar)
        .ok_or_else(|| invalid("Float", v))
}

fn coerce_big_decimal(v: &Value) -> Result<Value, BoxError> {
    match v.as_scalar() {
        Some(s @ (ScalarValue::Int(_) | ScalarValue::Float(_))) => Ok(Value::Scalar(s.clone())),
        Some(ScalarValue::String(s)) if s.parse::<f64>().is_ok_and(f64::is_finite) => {
            Ok(Value::scalar(s.as_str()))
        }
        _ => Err(invalid("BigDecimal", v)),
    }
}

fn coerce_char(v: &Value) -> Result<Value, BoxError> {
    match v.as_scalar().and_then(ScalarValue::as_str) {
        Some(s) if s.chars().count() == 1 => Ok(Value::scalar(s)),
        _ => Err(invalid("Char", v)),
    }
}

fn serialize_string(v: &Value) -> Result<Value, BoxError> {
    match v.as_scalar() {
        Some(s) => Ok(Value::scalar(s.to_string())),
        None => Err(invalid("String", v)),
    }
}

fn parse_string(v: &Value) -> Result<Value, BoxError> {
    match v.as_scalar().and_then(ScalarValue::as_str) {
        Some(s) => Ok(Value::scalar(s)),
        None => Err(invalid("String", v)),
    }
}

fn coerce_id(v: &Value) -> Result<Value, BoxError> {
    match v.as_scalar() {
        Some(ScalarValue::String(s)) => Ok(Value::scalar(s.as_str())),
        Some(ScalarValue::Int(i)) => Ok(Value::scalar(i.to_string())),
        _ => Err(invalid("ID", v)),
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
