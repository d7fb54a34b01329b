//! Executable code attached to a schema: field resolvers, abstract type
//! resolvers and scalar coercions.

use std::{error::Error as StdError, fmt, sync::Arc};

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};
use fnv::FnvHashMap;

use crate::{
    ast::InputValue,
    executor::{Arguments, Environment, Resolution, ResolverFn, default_resolver},
    schema::{meta::ObjectMeta, model::SchemaType, resolve_type::ResolveType},
    value::Value,
};

/// Error returned by user-supplied coercion functions.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// A user-supplied coercion function.
pub type CoerceFn = Arc<dyn Fn(&Value) -> Result<Value, BoxError> + Send + Sync>;

/// Direction of a scalar coercion.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum CoercionPhase {
    /// Host value to wire value.
    #[display("serialize")]
    Serialize,
    /// Wire value (e.g. a variable) to host value.
    #[display("parse value")]
    ParseValue,
    /// Schema-language literal to host value.
    #[display("parse literal")]
    ParseLiteral,
}

/// Failure of a scalar coercion.
#[derive(Clone, Debug, Display, Error, PartialEq)]
pub enum CoercionError {
    /// The input was deliberately rejected by a coercion function.
    ///
    /// Coercion functions return this to have their message reported
    /// verbatim.
    #[display("{_0}")]
    Invalid(#[error(not(source))] String),

    /// A coercion function failed in any other way.
    #[display("Error trying to {phase} ({input}) for scalar type '{scalar}': {cause}")]
    Unexpected {
        /// Scalar being coerced.
        scalar: ArcStr,
        /// Direction of the failed coercion.
        phase: CoercionPhase,
        /// The input that failed to coerce.
        input: String,
        /// Message of the underlying error.
        cause: String,
    },
}

/// Kind tag of a [`CoercionError`].
///
/// Engines may surface [`Invalid`](Self::Invalid) messages to clients, while
/// [`Unexpected`](Self::Unexpected) ones usually stay server side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoercionErrorKind {
    /// Signaled on purpose by a coercion function.
    Invalid,
    /// Any other failure.
    Unexpected,
}

impl CoercionError {
    /// Rejects the input with `message`.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    /// The kind tag of this error.
    pub fn kind(&self) -> CoercionErrorKind {
        match self {
            Self::Invalid(_) => CoercionErrorKind::Invalid,
            Self::Unexpected { .. } => CoercionErrorKind::Unexpected,
        }
    }
}

/// Serialization and parsing of one scalar type.
#[derive(Clone)]
pub struct ScalarCoercion {
    scalar: ArcStr,
    serialize: CoerceFn,
    deserialize: CoerceFn,
}

impl ScalarCoercion {
    /// Pairs `serialize` and `deserialize` functions for the scalar named
    /// `scalar`.
    pub fn new<S, D>(scalar: ArcStr, serialize: S, deserialize: D) -> Self
    where
        S: Fn(&Value) -> Result<Value, BoxError> + Send + Sync + 'static,
        D: Fn(&Value) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self::from_fns(scalar, Arc::new(serialize), Arc::new(deserialize))
    }

    pub(crate) fn from_fns(scalar: ArcStr, serialize: CoerceFn, deserialize: CoerceFn) -> Self {
        Self {
            scalar,
            serialize,
            deserialize,
        }
    }

    /// Name of the coerced scalar.
    pub fn scalar(&self) -> &ArcStr {
        &self.scalar
    }

    /// Turns a host value into its wire form.
    pub fn serialize(&self, value: &Value) -> Result<Value, CoercionError> {
        self.wrap(CoercionPhase::Serialize, value, (self.serialize)(value))
    }

    /// Turns a wire value into its host form.
    pub fn parse_value(&self, value: &Value) -> Result<Value, CoercionError> {
        self.wrap(CoercionPhase::ParseValue, value, (self.deserialize)(value))
    }

    /// Turns a schema-language literal into its host form.
    ///
    /// The literal is normalized into a plain [`Value`] first and then
    /// handed to the deserialize function.
    pub fn parse_literal(&self, literal: &InputValue) -> Result<Value, CoercionError> {
        let plain = literal.to_plain_value();
        self.wrap(CoercionPhase::ParseLiteral, literal, (self.deserialize)(&plain))
    }

    fn wrap(
        &self,
        phase: CoercionPhase,
        input: &dyn fmt::Display,
        result: Result<Value, BoxError>,
    ) -> Result<Value, CoercionError> {
        result.map_err(|e| match e.downcast::<CoercionError>() {
            Ok(e) => *e,
            Err(e) => CoercionError::Unexpected {
                scalar: self.scalar.clone(),
                phase,
                input: input.to_string(),
                cause: e.to_string(),
            },
        })
    }
}

impl fmt::Debug for ScalarCoercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarCoercion")
            .field("scalar", &self.scalar)
            .finish_non_exhaustive()
    }
}

/// Registry of the code attached to a schema.
///
/// Populated while building and frozen along with the schema.
#[derive(Clone, Default)]
pub struct CodeRegistry {
    field_resolvers: FnvHashMap<ArcStr, FnvHashMap<ArcStr, ResolverFn>>,
    type_resolvers: FnvHashMap<ArcStr, Arc<dyn ResolveType>>,
    scalar_coercions: FnvHashMap<ArcStr, ScalarCoercion>,
}

impl CodeRegistry {
    pub(crate) fn register_field_resolver(&mut self, owner: ArcStr, field: ArcStr, resolver: ResolverFn) {
        self.field_resolvers
            .entry(owner)
            .or_default()
            .insert(field, resolver);
    }

    pub(crate) fn register_type_resolver(&mut self, abstract_type: ArcStr, resolver: Arc<dyn ResolveType>) {
        self.type_resolvers.insert(abstract_type, resolver);
    }

    pub(crate) fn register_scalar_coercion(&mut self, scalar: ArcStr, coercion: ScalarCoercion) {
        self.scalar_coercions.insert(scalar, coercion);
    }

    /// The resolver explicitly attached to `owner.field`, if any.
    pub fn field_resolver(&self, owner: &str, field: &str) -> Option<&ResolverFn> {
        self.field_resolvers.get(owner)?.get(field)
    }

    /// Invokes the resolver of `env.owner.env.field_name`.
    ///
    /// Fields without an attached resolver go through [`default_resolver`].
    pub fn resolve_field(&self, env: &Environment<'_>, args: &Arguments) -> Resolution {
        match self.field_resolver(env.owner, env.field_name) {
            Some(resolver) => resolver(env, args),
            None => default_resolver(env, args),
        }
    }

    /// The type resolver of the abstract type `name`.
    pub fn type_resolver(&self, name: &str) -> Option<&dyn ResolveType> {
        self.type_resolvers.get(name).map(Arc::as_ref)
    }

    /// Resolves the concrete object type of `value` through the type
    /// resolver of the abstract type `abstract_name`.
    pub fn resolve_type<'s>(
        &self,
        abstract_name: &str,
        value: &Value,
        schema: &'s SchemaType,
    ) -> Option<&'s ObjectMeta> {
        self.type_resolver(abstract_name)?.resolve_type(value, schema)
    }

    /// The coercion of the scalar `name`.
    pub fn scalar_coercion(&self, name: &str) -> Option<&ScalarCoercion> {
        self.scalar_coercions.get(name)
    }

    /// Number of explicitly attached field resolvers.
    pub fn field_resolver_count(&self) -> usize {
        self.field_resolvers.values().map(FnvHashMap::len).sum()
    }
}

impl fmt::Debug for CodeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeRegistry")
            .field("field_resolvers", &self.field_resolver_count())
            .field("type_resolvers", &self.type_resolvers.keys().collect::<Vec<_>>())
            .field("scalar_coercions", &self.scalar_coercions.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ast::InputValue, value::Value};

    use super::{CoercionError, CoercionErrorKind, CoercionPhase, ScalarCoercion};

    fn upper() -> ScalarCoercion {
        ScalarCoercion::new(
            "Upper".into(),
            |v| Ok(v.clone()),
            |v| match v.as_scalar().and_then(|s| s.as_str()) {
                Some(s) if s.is_empty() => Err(CoercionError::invalid("Upper cannot be empty").into()),
                Some(s) => Ok(Value::scalar(s.to_uppercase())),
                None => Err("not a string".into()),
            },
        )
    }

    #[test]
    fn parses_literals_through_deserialize() {
        let c = upper();
        assert_eq!(
            c.parse_literal(&InputValue::scalar("abc")),
            Ok(Value::scalar("ABC")),
        );
        assert_eq!(
            c.parse_literal(&InputValue::enum_value("abc")),
            Ok(Value::scalar("ABC")),
        );
    }

    #[test]
    fn intentional_failures_pass_through() {
        let err = upper().parse_value(&Value::scalar("")).unwrap_err();
        assert_eq!(err, CoercionError::invalid("Upper cannot be empty"));
        assert_eq!(err.kind(), CoercionErrorKind::Invalid);
        assert_eq!(err.to_string(), "Upper cannot be empty");
    }

    #[test]
    fn other_failures_are_wrapped() {
        let err = upper().parse_literal(&InputValue::scalar(1_i64)).unwrap_err();
        assert_eq!(
            err,
            CoercionError::Unexpected {
                scalar: "Upper".into(),
                phase: CoercionPhase::ParseLiteral,
                input: "1".into(),
                cause: "not a string".into(),
            },
        );
        assert_eq!(err.kind(), CoercionErrorKind::Unexpected);
        assert_eq!(
            err.to_string(),
            "Error trying to parse literal (1) for scalar type 'Upper': not a string",
        );
    }
}
