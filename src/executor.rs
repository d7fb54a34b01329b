//! Contract between a built schema and the engine executing it.
//!
//! Execution itself happens elsewhere. This module defines what a field
//! resolver receives ([`Environment`], [`Arguments`]) and what it hands back
//! ([`Resolution`]).

use std::{fmt, sync::Arc};

use arcstr::ArcStr;
use futures::future::{BoxFuture, FutureExt as _};
use indexmap::IndexMap;

use crate::{ast::InputValue, schema::meta::Argument, schema::model::SchemaType, value::Value};

/// Error type for errors that occur during field resolution
///
/// Field errors are represented by a human-readable error message and an
/// optional `Value` structure containing additional information.
///
/// They can be converted to from any type that implements `std::fmt::Display`,
/// which makes error chaining with the `?` operator a breeze:
///
/// ```rust
/// # use graphql_dsl::FieldError;
/// fn get_string(data: Vec<u8>) -> Result<String, FieldError> {
///     let s = String::from_utf8(data)?;
///     Ok(s)
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    message: String,
    extensions: Value,
}

impl<T: fmt::Display> From<T> for FieldError {
    fn from(e: T) -> Self {
        Self {
            message: e.to_string(),
            extensions: Value::null(),
        }
    }
}

impl FieldError {
    /// Construct a new error with additional data
    ///
    /// The `extensions` are meant to be merged into the error reported by the
    /// executing engine.
    pub fn new<T: fmt::Display>(e: T, extensions: Value) -> Self {
        Self {
            message: e.to_string(),
            extensions,
        }
    }

    /// Access the message for this error
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Access the additional data for this error
    pub fn extensions(&self) -> &Value {
        &self.extensions
    }
}

/// The result of resolving the value of a field of type `T`
pub type FieldResult<T> = Result<T, FieldError>;

/// Field argument container
///
/// Holds the arguments provided to one field invocation. Arguments declared
/// with a default value but not provided (or provided as `null`) hold the
/// default, other missing arguments hold `null`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments {
    args: IndexMap<ArcStr, InputValue>,
}

impl Arguments {
    /// Gathers the provided arguments of an invocation, completing them
    /// from the declared `meta_args`.
    pub fn new(mut args: IndexMap<ArcStr, InputValue>, meta_args: Option<&[Argument]>) -> Self {
        for arg in meta_args.unwrap_or_default() {
            if args.get(&arg.name).is_none_or(InputValue::is_null) {
                let value = arg.default_value.clone().unwrap_or(InputValue::Null);
                args.insert(arg.name.clone(), value);
            }
        }
        Self { args }
    }

    /// Gets the raw literal of an argument.
    pub fn get_input_value(&self, key: &str) -> Option<&InputValue> {
        self.args.get(key)
    }

    /// Gets an argument normalized into a plain [`Value`].
    ///
    /// Returns [`None`] if the argument is absent.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.args.get(key).map(InputValue::to_plain_value)
    }

    /// Iterates over arguments in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ArcStr, &InputValue)> {
        self.args.iter()
    }

    /// Number of arguments held.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Checks whether no argument is held.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

/// What a field resolver gets to look at.
#[derive(Clone, Copy, Debug)]
pub struct Environment<'a> {
    /// The value the field is selected on.
    pub parent: &'a Value,
    /// The schema being executed.
    pub schema: &'a SchemaType,
    /// Type owning the field.
    pub owner: &'a str,
    /// Name of the resolved field.
    pub field_name: &'a str,
}

/// Outcome of invoking a field resolver.
///
/// Resolvers either produce their value on the spot or hand out a future
/// the executing engine awaits.
pub enum Resolution {
    /// Value computed synchronously.
    Ready(FieldResult<Value>),
    /// Value still being computed.
    Deferred(BoxFuture<'static, FieldResult<Value>>),
}

impl Resolution {
    /// A successfully resolved value.
    pub fn ready(value: impl Into<Value>) -> Self {
        Self::Ready(Ok(value.into()))
    }

    /// A failed resolution.
    pub fn error(error: impl Into<FieldError>) -> Self {
        Self::Ready(Err(error.into()))
    }

    /// A value produced by `fut`.
    pub fn deferred<F>(fut: F) -> Self
    where
        F: Future<Output = FieldResult<Value>> + Send + 'static,
    {
        Self::Deferred(fut.boxed())
    }

    /// Checks whether the value is available without awaiting.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Awaits the resolved value.
    pub async fn resolve(self) -> FieldResult<Value> {
        match self {
            Self::Ready(r) => r,
            Self::Deferred(fut) => fut.await,
        }
    }
}

impl From<FieldResult<Value>> for Resolution {
    fn from(r: FieldResult<Value>) -> Self {
        Self::Ready(r)
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(r) => f.debug_tuple("Ready").field(r).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// A field resolver.
pub type ResolverFn = Arc<dyn Fn(&Environment<'_>, &Arguments) -> Resolution + Send + Sync>;

/// The resolver used for fields without one: reads the field of the same
/// name off the parent object.
///
/// Missing fields resolve to `null`. Parents that are not objects are an
/// error.
pub fn default_resolver(env: &Environment<'_>, _: &Arguments) -> Resolution {
    match env.parent {
        Value::Object(o) => {
            Resolution::ready(o.get_field_value(env.field_name).cloned().unwrap_or_default())
        }
        other => Resolution::error(format!(
            "Cannot read field `{}.{}` of non-object value {other}",
            env.owner, env.field_name,
        )),
    }
}

#[cfg(test)]
mod tests {
    use arcstr::ArcStr;
    use indexmap::IndexMap;

    use crate::{ast::InputValue, schema::meta::Argument, ast::Type, value::Value};

    use super::{Arguments, FieldError, Resolution};

    #[test]
    fn arguments_fall_back_to_defaults() {
        let meta = vec![
            Argument::new("x".into(), Type::Named("String".into()))
                .default_value(InputValue::scalar("--")),
            Argument::new("y".into(), Type::Named("Int".into())),
            Argument::new("z".into(), Type::Named("Int".into()))
                .default_value(InputValue::scalar(3_i64)),
        ];
        let provided = IndexMap::from([
            (ArcStr::from("x"), InputValue::Null),
            (ArcStr::from("z"), InputValue::scalar(7_i64)),
        ]);

        let args = Arguments::new(provided, Some(&meta));

        assert_eq!(args.get("x"), Some(Value::scalar("--")));
        assert_eq!(args.get("y"), Some(Value::Null));
        assert_eq!(args.get("z"), Some(Value::scalar(7_i64)));
        assert_eq!(args.get("w"), None);
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn field_errors_convert_from_displayable() {
        fn parse(s: &str) -> Result<i64, FieldError> {
            Ok(s.parse::<i64>()?)
        }

        let err = parse("nope").unwrap_err();
        assert_eq!(err.message(), "invalid digit found in string");
        assert!(err.extensions().is_null());
    }

    #[tokio::test]
    async fn deferred_resolution_is_awaited() {
        let res = Resolution::deferred(async { Ok(Value::scalar(42_i64)) });
        assert!(!res.is_ready());
        assert_eq!(res.resolve().await, Ok(Value::scalar(42_i64)));

        let res = Resolution::ready("now");
        assert!(res.is_ready());
        assert_eq!(res.resolve().await, Ok(Value::scalar("now")));
    }
}
