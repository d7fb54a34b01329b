use arcstr::ArcStr;
use derive_more::with_trait::Display;
use fnv::FnvHashMap;
use indexmap::IndexMap;

use crate::{
    ast::{InputValue, Type},
    manifest::ModelHierarchy,
    schema::{
        code_registry::CodeRegistry,
        meta::{Argument, MetaType, ObjectMeta},
        printer::{self, PrintOptions},
    },
    value::Value,
};

/// Frozen metadata of a built schema.
///
/// Holds every named type in registration order (built-in scalars last), the
/// directive definitions, the root operation type names, the [`CodeRegistry`]
/// and the [`ModelHierarchy`] gathered while building. Nothing can be changed
/// once a [`SchemaType`] exists.
#[derive(Debug)]
pub struct SchemaType {
    pub(crate) types: IndexMap<ArcStr, MetaType>,
    pub(crate) query_type_name: ArcStr,
    pub(crate) mutation_type_name: Option<ArcStr>,
    pub(crate) subscription_type_name: Option<ArcStr>,
    pub(crate) directives: IndexMap<ArcStr, DirectiveType>,
    pub(crate) code_registry: CodeRegistry,
    pub(crate) models: ModelHierarchy,
}

static_assertions::assert_impl_all!(SchemaType: Send, Sync);

/// Root operation kinds of a schema.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum OperationType {
    /// Read-only entry point. Mandatory.
    #[display("query")]
    Query,
    /// Write entry point.
    #[display("mutation")]
    Mutation,
    /// Streaming entry point.
    #[display("subscription")]
    Subscription,
}

/// Definition of a directive.
#[derive(Clone, Debug)]
pub struct DirectiveType {
    /// Name of the directive, without the leading `@`.
    pub name: ArcStr,
    /// Optional description.
    pub description: Option<ArcStr>,
    /// Locations the directive may be applied at.
    pub locations: Vec<DirectiveLocation>,
    /// Arguments in declaration order.
    pub arguments: Vec<Argument>,
    /// Whether the directive may be applied more than once at one location.
    pub is_repeatable: bool,
}

/// Location a directive may be applied at.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum DirectiveLocation {
    #[display("QUERY")]
    Query,
    #[display("MUTATION")]
    Mutation,
    #[display("SUBSCRIPTION")]
    Subscription,
    #[display("FIELD")]
    Field,
    #[display("FRAGMENT_DEFINITION")]
    FragmentDefinition,
    #[display("FRAGMENT_SPREAD")]
    FragmentSpread,
    #[display("INLINE_FRAGMENT")]
    InlineFragment,
    #[display("VARIABLE_DEFINITION")]
    VariableDefinition,
    #[display("SCHEMA")]
    Schema,
    #[display("SCALAR")]
    Scalar,
    #[display("OBJECT")]
    Object,
    #[display("FIELD_DEFINITION")]
    FieldDefinition,
    #[display("ARGUMENT_DEFINITION")]
    ArgumentDefinition,
    #[display("INTERFACE")]
    Interface,
    #[display("UNION")]
    Union,
    #[display("ENUM")]
    Enum,
    #[display("ENUM_VALUE")]
    EnumValue,
    #[display("INPUT_OBJECT")]
    InputObject,
    #[display("INPUT_FIELD_DEFINITION")]
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// Every location, in the order the schema language lists them.
    pub const ALL: [Self; 19] = [
        Self::Query,
        Self::Mutation,
        Self::Subscription,
        Self::Field,
        Self::FragmentDefinition,
        Self::FragmentSpread,
        Self::InlineFragment,
        Self::VariableDefinition,
        Self::Schema,
        Self::Scalar,
        Self::Object,
        Self::FieldDefinition,
        Self::ArgumentDefinition,
        Self::Interface,
        Self::Union,
        Self::Enum,
        Self::EnumValue,
        Self::InputObject,
        Self::InputFieldDefinition,
    ];
}

/// A directive applied to a schema element, with its bound argument values.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveApplication {
    /// Name of the applied directive.
    pub name: ArcStr,
    /// Bound argument values, in the order they were bound.
    pub arguments: IndexMap<ArcStr, InputValue>,
}

impl DirectiveApplication {
    /// Applies the directive `name` without arguments.
    pub fn new(name: ArcStr) -> Self {
        Self {
            name,
            arguments: IndexMap::new(),
        }
    }

    /// Bound value of the argument `name`, if any.
    pub fn argument(&self, name: &str) -> Option<&InputValue> {
        self.arguments.get(name)
    }
}

impl SchemaType {
    /// Looks up a named type.
    pub fn type_by_name(&self, name: &str) -> Option<&MetaType> {
        self.types.get(name)
    }

    /// Looks up a named type, requiring it to be an object type.
    pub fn object_by_name(&self, name: &str) -> Option<&ObjectMeta> {
        match self.types.get(name)? {
            MetaType::Object(o) => Some(o),
            _ => None,
        }
    }

    /// All named types, in registration order.
    pub fn types(&self) -> impl Iterator<Item = &MetaType> {
        self.types.values()
    }

    /// Number of named types, built-ins included.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// The query root type.
    pub fn query_type(&self) -> &ObjectMeta {
        self.object_by_name(&self.query_type_name)
            .unwrap_or_else(|| panic!("query type `{}` vanished", self.query_type_name))
    }

    /// The mutation root type, if the schema has one.
    pub fn mutation_type(&self) -> Option<&ObjectMeta> {
        self.mutation_type_name
            .as_ref()
            .and_then(|n| self.object_by_name(n))
    }

    /// The subscription root type, if the schema has one.
    pub fn subscription_type(&self) -> Option<&ObjectMeta> {
        self.subscription_type_name
            .as_ref()
            .and_then(|n| self.object_by_name(n))
    }

    /// Name of the root type of `operation`, if configured.
    pub fn root_type_name(&self, operation: OperationType) -> Option<&ArcStr> {
        match operation {
            OperationType::Query => Some(&self.query_type_name),
            OperationType::Mutation => self.mutation_type_name.as_ref(),
            OperationType::Subscription => self.subscription_type_name.as_ref(),
        }
    }

    /// Looks up a directive definition, built-ins included.
    pub fn directive_by_name(&self, name: &str) -> Option<&DirectiveType> {
        self.directives.get(name)
    }

    /// All directive definitions, in registration order.
    pub fn directives(&self) -> impl Iterator<Item = &DirectiveType> {
        self.directives.values()
    }

    /// Executable code attached to the schema.
    pub fn code_registry(&self) -> &CodeRegistry {
        &self.code_registry
    }

    /// Subtyping relation of the models behind the declared types.
    pub fn models(&self) -> &ModelHierarchy {
        &self.models
    }

    /// Concrete object types an abstract type may resolve to.
    ///
    /// For unions these are the members, for interfaces the object types
    /// implementing it directly. Any other type has no possible types.
    pub fn possible_types(&self, t: &MetaType) -> Vec<&ObjectMeta> {
        match t {
            MetaType::Union(u) => u
                .of_type_names
                .iter()
                .filter_map(|n| self.object_by_name(n))
                .collect(),
            MetaType::Interface(i) => self
                .types
                .values()
                .filter_map(|t| match t {
                    MetaType::Object(o) if o.interface_names.contains(&i.name) => Some(o),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Checks whether `possible_type` is one of the [`possible_types`] of
    /// `abstract_type`.
    ///
    /// [`possible_types`]: Self::possible_types
    pub fn is_possible_type(&self, abstract_type: &MetaType, possible_type: &ObjectMeta) -> bool {
        self.possible_types(abstract_type)
            .iter()
            .any(|t| t.name == possible_type.name)
    }

    /// Resolves the concrete object type of `value` returned from a field of
    /// the abstract type `abstract_name`.
    ///
    /// Returns [`None`] when `abstract_name` has no type resolver or when the
    /// resolver cannot place the value.
    pub fn resolve_abstract_type(&self, abstract_name: &str, value: &Value) -> Option<&ObjectMeta> {
        self.code_registry.resolve_type(abstract_name, value, self)
    }

    /// Checks whether `t` refers to a type usable in input positions.
    pub fn is_input_type(&self, t: &Type) -> bool {
        self.type_by_name(t.innermost_name())
            .is_some_and(MetaType::is_input)
    }

    /// Renders the schema language form of this schema.
    pub fn as_schema_language(&self) -> String {
        printer::print_schema(self, &PrintOptions::default())
    }

    /// Renders the schema language form of this schema with the given
    /// options.
    pub fn as_schema_language_with(&self, options: &PrintOptions) -> String {
        printer::print_schema(self, options)
    }

    /// Translates this schema into a [`graphql_parser`] document.
    #[cfg(feature = "schema-language")]
    pub fn as_document(&self) -> graphql_parser::schema::Document<'static, String> {
        use crate::schema::translate::{SchemaTranslator as _, graphql_parser::GraphQLParserTranslator};

        GraphQLParserTranslator::translate_schema(self)
    }

    /// Counts the types of each kind, for diagnostics.
    pub(crate) fn kind_counts(&self) -> FnvHashMap<String, usize> {
        let mut counts = FnvHashMap::default();
        for t in self.types.values() {
            *counts.entry(t.type_kind().to_string()).or_insert(0) += 1;
        }
        counts
    }
}

impl DirectiveType {
    /// Builds a new [`DirectiveType`] allowed at the given `locations`.
    pub fn new(name: ArcStr, locations: &[DirectiveLocation], arguments: Vec<Argument>) -> Self {
        Self {
            name,
            description: None,
            locations: locations.to_vec(),
            arguments,
            is_repeatable: false,
        }
    }

    fn new_conditional(name: &'static str, description: &'static str) -> Self {
        Self::new(
            ArcStr::from(name),
            &[
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            vec![Argument::new(
                arcstr::literal!("if"),
                Type::NonNullNamed(arcstr::literal!("Boolean")),
            )],
        )
        .description(ArcStr::from(description))
    }

    /// The built-in `@skip(if: Boolean!)` directive.
    pub fn new_skip() -> Self {
        Self::new_conditional(
            "skip",
            "Directs the executor to skip this field or fragment when the `if` argument is true.",
        )
    }

    /// The built-in `@include(if: Boolean!)` directive.
    pub fn new_include() -> Self {
        Self::new_conditional(
            "include",
            "Directs the executor to include this field or fragment only when the `if` argument is true.",
        )
    }

    /// The built-in `@defer(if: Boolean!)` directive.
    pub fn new_defer() -> Self {
        Self::new_conditional(
            "defer",
            "Directs the executor to deliver this field or fragment after the rest of the response.",
        )
    }

    /// Definitions injected into every schema.
    pub fn builtins() -> [Self; 3] {
        [Self::new_skip(), Self::new_include(), Self::new_defer()]
    }

    /// Checks whether `name` is one of the [`builtins`](Self::builtins).
    pub fn is_builtin_name(name: &str) -> bool {
        matches!(name, "skip" | "include" | "defer")
    }

    /// Returns true if this is one of the built-in directives.
    pub fn is_builtin(&self) -> bool {
        Self::is_builtin_name(&self.name)
    }

    /// Sets the `description` of this [`DirectiveType`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Checks whether the directive may be applied at `location`.
    pub fn allows(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    /// Access an argument's meta data given its name
    pub fn argument_by_name(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::{DirectiveLocation, DirectiveType, OperationType};

    #[test]
    fn locations_print_in_schema_language() {
        assert_eq!(DirectiveLocation::FieldDefinition.to_string(), "FIELD_DEFINITION");
        assert_eq!(DirectiveLocation::InputObject.to_string(), "INPUT_OBJECT");
        assert_eq!(DirectiveLocation::ALL.len(), 19);
        assert_eq!(OperationType::Subscription.to_string(), "subscription");
    }

    #[test]
    fn builtin_directives_take_a_condition() {
        for d in DirectiveType::builtins() {
            assert!(d.is_builtin());
            assert!(d.allows(DirectiveLocation::Field));
            assert!(!d.allows(DirectiveLocation::Object));
            let arg = d.argument_by_name("if").expect("`if` argument");
            assert_eq!(arg.arg_type.to_string(), "Boolean!");
        }
    }
}
