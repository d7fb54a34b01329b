//! Frozen descriptions of the named types of a schema.

use std::fmt;

use arcstr::ArcStr;

use crate::{ast::InputValue, ast::Type, schema::model::DirectiveApplication, types::scalars};

/// Deprecation of a field or an enum value.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DeprecationStatus {
    /// Not deprecated.
    Current,
    /// Deprecated, optionally telling what to use instead.
    Deprecated(Option<ArcStr>),
}

/// The kind of a named type.
///
/// Displays as the keyword introducing the type in schema language.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scalar => "scalar",
            Self::Object => "type",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::InputObject => "input",
        })
    }
}

/// A scalar type.
///
/// Its coercions live in the code registry, keyed by `name`.
#[derive(Debug)]
pub struct ScalarMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
}

/// An object type.
#[derive(Debug)]
pub struct ObjectMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: Vec<Field>,
    #[doc(hidden)]
    pub interface_names: Vec<ArcStr>,
    #[doc(hidden)]
    pub directives: Vec<DirectiveApplication>,
}

/// An enumeration type.
#[derive(Debug)]
pub struct EnumMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub values: Vec<EnumValue>,
}

/// An interface type.
#[derive(Debug)]
pub struct InterfaceMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: Vec<Field>,
    #[doc(hidden)]
    pub interface_names: Vec<ArcStr>,
}

/// A union type.
#[derive(Debug)]
pub struct UnionMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub of_type_names: Vec<ArcStr>,
}

/// An input object type.
#[derive(Debug)]
pub struct InputObjectMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub input_fields: Vec<Argument>,
}

/// Any named type of a schema.
#[derive(Debug)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum MetaType {
    Scalar(ScalarMeta),
    Object(ObjectMeta),
    Enum(EnumMeta),
    Interface(InterfaceMeta),
    Union(UnionMeta),
    InputObject(InputObjectMeta),
}

/// A field of an object or interface type.
#[derive(Debug, Clone)]
pub struct Field {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub arguments: Option<Vec<Argument>>,
    #[doc(hidden)]
    pub field_type: Type,
    #[doc(hidden)]
    pub deprecation_status: DeprecationStatus,
}

impl Field {
    /// Names starting with `__` are reserved for introspection.
    pub fn is_builtin(&self) -> bool {
        self.name.starts_with("__")
    }

    /// Looks up one of the field's arguments.
    pub fn argument_by_name(&self, name: &str) -> Option<&Argument> {
        self.arguments.as_deref()?.iter().find(|a| a.name == name)
    }
}

/// An argument of a field or a directive, or a field of an input object.
#[derive(Debug, Clone)]
pub struct Argument {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub arg_type: Type,
    #[doc(hidden)]
    pub default_value: Option<InputValue>,
}

impl Argument {
    /// Creates an undescribed argument without a default value.
    pub fn new(name: ArcStr, arg_type: Type) -> Self {
        Self {
            name,
            description: None,
            arg_type,
            default_value: None,
        }
    }

    /// Sets the value used when the argument is not provided.
    #[must_use]
    pub fn default_value(mut self, val: InputValue) -> Self {
        self.default_value = Some(val);
        self
    }

    /// Names starting with `__` are reserved for introspection.
    pub fn is_builtin(&self) -> bool {
        self.name.starts_with("__")
    }
}

/// One value of an enumeration type.
#[derive(Debug, Clone)]
pub struct EnumValue {
    /// Name of the value, as written in queries and responses.
    pub name: ArcStr,
    /// Description of this value, not of the enumeration.
    pub description: Option<ArcStr>,
    /// Whether the value is deprecated.
    pub deprecation_status: DeprecationStatus,
}

impl MetaType {
    /// Name of the type.
    pub fn name(&self) -> &ArcStr {
        match self {
            Self::Scalar(ScalarMeta { name, .. })
            | Self::Object(ObjectMeta { name, .. })
            | Self::Enum(EnumMeta { name, .. })
            | Self::Interface(InterfaceMeta { name, .. })
            | Self::Union(UnionMeta { name, .. })
            | Self::InputObject(InputObjectMeta { name, .. }) => name,
        }
    }

    /// Description of the type, if any.
    pub fn description(&self) -> Option<&ArcStr> {
        match self {
            Self::Scalar(ScalarMeta { description, .. })
            | Self::Object(ObjectMeta { description, .. })
            | Self::Enum(EnumMeta { description, .. })
            | Self::Interface(InterfaceMeta { description, .. })
            | Self::Union(UnionMeta { description, .. })
            | Self::InputObject(InputObjectMeta { description, .. }) => description.as_ref(),
        }
    }

    /// Kind of the type.
    pub fn type_kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Object(_) => TypeKind::Object,
            Self::Enum(_) => TypeKind::Enum,
            Self::Interface(_) => TypeKind::Interface,
            Self::Union(_) => TypeKind::Union,
            Self::InputObject(_) => TypeKind::InputObject,
        }
    }

    /// Looks up a field of an object or interface type.
    ///
    /// Always `None` for other kinds.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        match self {
            Self::Object(ObjectMeta { fields, .. })
            | Self::Interface(InterfaceMeta { fields, .. }) => fields.iter().find(|f| f.name == name),
            _ => None,
        }
    }

    /// Whether values of the type may be provided as arguments.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_) | Self::InputObject(_))
    }

    /// Whether the type may be returned by a field.
    pub fn is_output(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    /// Whether the type is one of the built-in scalars or reserved for
    /// introspection.
    pub fn is_builtin(&self) -> bool {
        let name = self.name();
        name.starts_with("__") || scalars::is_builtin_scalar(name)
    }
}

impl ScalarMeta {
    /// Creates an undescribed scalar type.
    pub fn new(name: ArcStr) -> Self {
        Self {
            name,
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Wraps this type into a [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Scalar(self)
    }
}

impl ObjectMeta {
    /// Creates an undescribed object type with the given `fields`.
    pub fn new(name: ArcStr, fields: Vec<Field>) -> Self {
        Self {
            name,
            description: None,
            fields,
            interface_names: vec![],
            directives: vec![],
        }
    }

    /// Replaces the names of the implemented interfaces.
    #[must_use]
    pub fn interfaces(mut self, interfaces: Vec<ArcStr>) -> Self {
        self.interface_names = interfaces;
        self
    }

    /// Replaces the directive applications.
    #[must_use]
    pub fn directives(mut self, directives: Vec<DirectiveApplication>) -> Self {
        self.directives = directives;
        self
    }

    /// Wraps this type into a [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Object(self)
    }
}

impl EnumMeta {
    /// Creates an undescribed enumeration with the given `values`.
    pub fn new(name: ArcStr, values: Vec<EnumValue>) -> Self {
        Self {
            name,
            description: None,
            values,
        }
    }

    /// Wraps this type into a [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Enum(self)
    }
}

impl InterfaceMeta {
    /// Creates an undescribed interface type with the given `fields`.
    pub fn new(name: ArcStr, fields: Vec<Field>) -> Self {
        Self {
            name,
            description: None,
            fields,
            interface_names: Vec::new(),
        }
    }

    /// Replaces the names of the implemented interfaces.
    #[must_use]
    pub fn interfaces(mut self, interfaces: Vec<ArcStr>) -> Self {
        self.interface_names = interfaces;
        self
    }

    /// Wraps this type into a [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Interface(self)
    }
}

impl UnionMeta {
    /// Creates an undescribed union of the named object types.
    pub fn new(name: ArcStr, of_type_names: Vec<ArcStr>) -> Self {
        Self {
            name,
            description: None,
            of_type_names,
        }
    }

    /// Wraps this type into a [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Union(self)
    }
}

impl InputObjectMeta {
    /// Creates an undescribed input object type with the given fields.
    pub fn new(name: ArcStr, input_fields: Vec<Argument>) -> Self {
        Self {
            name,
            description: None,
            input_fields,
        }
    }

    /// Wraps this type into a [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::InputObject(self)
    }
}
