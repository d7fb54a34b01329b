use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};

use crate::schema::{
    meta::TypeKind,
    model::{DirectiveLocation, OperationType},
};

/// Error raised while declaring or assembling a schema.
///
/// Every variant names the offending type, field, or directive. Errors are
/// never recovered from locally: the first one aborts the build and no
/// schema is returned.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum BuildError {
    /// Two types or two directives were declared with the same name.
    ///
    /// Built-in scalar and directive names count as already declared.
    #[display("The type '{name}' is already defined")]
    DuplicateDefinition {
        /// The clashing name.
        name: ArcStr,
    },

    /// A member that is absent from the manifest was customized.
    #[display("Cannot modify the member '{field}' of '{owner}': no such member")]
    UnknownField {
        /// Type, field or directive owning the member.
        owner: String,
        /// The unknown member name.
        field: ArcStr,
    },

    /// A scalar lacks one of its coercion functions.
    #[display("The {missing} method must be defined for scalar type '{scalar}'")]
    MissingCoercion {
        /// The incomplete scalar.
        scalar: ArcStr,
        /// Either `serialize` or `deserialize`.
        missing: &'static str,
    },

    /// A directive has no valid location.
    #[display("The directive '@{directive}' must have at least one location")]
    NoLocation {
        /// The directive name.
        directive: ArcStr,
    },

    /// A union has no member types.
    #[display("The union '{union}' requires at least one member type")]
    EmptyUnion {
        /// The union name.
        union: ArcStr,
    },

    /// An object, interface or input object type has no fields, or an
    /// enumeration has no values.
    #[display("The {kind} '{name}' must define at least one {member}")]
    EmptyType {
        /// Kind of the empty type.
        kind: TypeKind,
        /// The type name.
        name: ArcStr,
        /// Either `field` or `value`.
        member: &'static str,
    },

    /// No query root operation was configured.
    #[display("At least the query type of the schema must be defined")]
    MissingQueryType,

    /// A root operation names a type that was never declared.
    #[display("There is no type defined with name '{name}' for the {operation} root")]
    UndeclaredRootType {
        /// The root operation.
        operation: OperationType,
        /// The undeclared type name.
        name: ArcStr,
    },

    /// A position requiring an object type holds something else.
    #[display("'{name}' is used as {role}, which requires an object type")]
    NotAnObjectType {
        /// The offending type name.
        name: ArcStr,
        /// Where the type was used, e.g. `the query root`.
        role: String,
    },

    /// An `implement(...)` target is not an interface type.
    #[display("'{implementor}' implements '{name}', which is not an interface type")]
    NotAnInterfaceType {
        /// The offending type name.
        name: ArcStr,
        /// The implementing type.
        implementor: ArcStr,
    },

    /// A type name was referenced but never declared.
    #[display("Unknown type '{name}' referenced by '{referrer}'")]
    UnresolvedTypeReference {
        /// The unresolved name.
        name: ArcStr,
        /// Where the reference occurs, e.g. `Query.hero`.
        referrer: String,
    },

    /// A type is used in a position its kind does not allow, e.g. an input
    /// object as a field result.
    #[display("'{name}' referenced by '{referrer}' is not an {expected} type")]
    InvalidTypePosition {
        /// The misplaced type name.
        name: ArcStr,
        /// Where the reference occurs.
        referrer: String,
        /// Either `input` or `output`.
        expected: &'static str,
    },

    /// A default value does not fit the declared type.
    #[display("Invalid default value {value} for '{owner}' of type '{expected}': {reason}")]
    DefaultValueType {
        /// The argument or input field, e.g. `Query.scalar(x)`.
        owner: String,
        /// The declared type.
        expected: String,
        /// The rejected literal.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A bound directive-application value does not fit the argument type.
    #[display("Invalid value {value} for argument '{owner}' of type '{expected}': {reason}")]
    ArgumentValueType {
        /// The bound argument, e.g. `@auth(role) on Query`.
        owner: String,
        /// The declared type.
        expected: String,
        /// The rejected literal.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A directive application references an undefined directive.
    #[display("Unknown directive '@{name}' applied on '{referrer}'")]
    UnknownDirective {
        /// The directive name.
        name: ArcStr,
        /// The type carrying the application.
        referrer: ArcStr,
    },

    /// A directive is applied at a location it does not allow.
    #[display("The directive '@{directive}' is not allowed on {location} '{referrer}'")]
    MisplacedDirective {
        /// The directive name.
        directive: ArcStr,
        /// The location of the application.
        location: DirectiveLocation,
        /// The type carrying the application.
        referrer: ArcStr,
    },
}

/// Shortcut for results of building operations.
pub type BuildResult<T> = Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::BuildError;

    #[test]
    fn messages_name_the_offender() {
        let err = BuildError::MissingCoercion {
            scalar: "Date".into(),
            missing: "deserialize",
        };
        assert_eq!(
            err.to_string(),
            "The deserialize method must be defined for scalar type 'Date'",
        );

        let err = BuildError::UnknownField {
            owner: "Point".into(),
            field: "z".into(),
        };
        assert!(err.to_string().contains("'z'"));
        assert!(err.to_string().contains("'Point'"));
    }
}
