use std::collections::BTreeMap;

use graphql_parser::{
    Pos,
    query::{Directive as ExternalDirective, Number as ExternalNumber, Type as ExternalType},
    schema::{
        Definition, DirectiveDefinition as ExternalDirectiveDefinition,
        DirectiveLocation as ExternalDirectiveLocation, Document, EnumType as ExternalEnum,
        EnumValue as ExternalEnumValue, Field as ExternalField,
        InputObjectType as ExternalInputObjectType, InputValue as ExternalInputValue,
        InterfaceType as ExternalInterfaceType, ObjectType as ExternalObjectType,
        ScalarType as ExternalScalarType, SchemaDefinition, TypeDefinition as ExternalTypeDefinition,
        UnionType as ExternalUnionType, Value as ExternalValue,
    },
};

use crate::{
    ast::{InputValue, Type},
    schema::{
        meta::{Argument, DeprecationStatus, EnumValue, Field, MetaType},
        model::{DirectiveApplication, DirectiveLocation, DirectiveType, SchemaType},
        translate::SchemaTranslator,
    },
    value::ScalarValue,
};

/// Translates a [`SchemaType`] into a [`graphql_parser`] schema [`Document`].
///
/// Definitions come in the order the schema printer uses, so that parsing
/// the printed schema yields an equal document.
pub struct GraphQLParserTranslator;

impl From<&SchemaType> for Document<'static, String> {
    fn from(input: &SchemaType) -> Self {
        GraphQLParserTranslator::translate_schema(input)
    }
}

impl SchemaTranslator<Document<'static, String>> for GraphQLParserTranslator {
    fn translate_schema(input: &SchemaType) -> Document<'static, String> {
        let mut definitions = vec![Definition::SchemaDefinition(SchemaDefinition {
            position: Pos::default(),
            directives: vec![],
            query: Some(input.query_type_name.to_string()),
            mutation: input.mutation_type_name.as_ref().map(ToString::to_string),
            subscription: input.subscription_type_name.as_ref().map(ToString::to_string),
        })];

        definitions.extend(
            input
                .directives
                .values()
                .filter(|d| !d.is_builtin())
                .map(|d| Definition::DirectiveDefinition(Self::translate_directive(d))),
        );
        definitions.extend(
            input
                .types
                .values()
                .filter(|meta| !meta.is_builtin())
                .map(|meta| Definition::TypeDefinition(Self::translate_meta(meta))),
        );

        Document { definitions }
    }
}

impl GraphQLParserTranslator {
    fn translate_argument(input: &Argument) -> ExternalInputValue<'static, String> {
        ExternalInputValue {
            position: Pos::default(),
            description: input.description.as_ref().map(ToString::to_string),
            name: input.name.to_string(),
            value_type: Self::translate_type(&input.arg_type),
            default_value: input.default_value.as_ref().map(Self::translate_value),
            directives: vec![],
        }
    }

    fn translate_value(input: &InputValue) -> ExternalValue<'static, String> {
        match input {
            InputValue::Null => ExternalValue::Null,
            InputValue::Scalar(x) => match x {
                ScalarValue::String(v) => ExternalValue::String(v.clone()),
                ScalarValue::Int(v) => match i32::try_from(*v) {
                    Ok(v) => ExternalValue::Int(ExternalNumber::from(v)),
                    // `Number` is only constructible from `i32`.
                    Err(_) => ExternalValue::Float(*v as f64),
                },
                ScalarValue::Float(v) => ExternalValue::Float(*v),
                ScalarValue::Boolean(v) => ExternalValue::Boolean(*v),
            },
            InputValue::Enum(x) => ExternalValue::Enum(x.clone()),
            InputValue::List(x) => ExternalValue::List(x.iter().map(Self::translate_value).collect()),
            InputValue::Object(x) => ExternalValue::Object(
                x.iter()
                    .map(|(k, v)| (k.clone(), Self::translate_value(v)))
                    .collect::<BTreeMap<_, _>>(),
            ),
        }
    }

    fn translate_type(input: &Type) -> ExternalType<'static, String> {
        match input {
            Type::Named(x) => ExternalType::NamedType(x.to_string()),
            Type::List(x) => ExternalType::ListType(Box::new(Self::translate_type(x))),
            Type::NonNullNamed(x) => {
                ExternalType::NonNullType(Box::new(ExternalType::NamedType(x.to_string())))
            }
            Type::NonNullList(x) => ExternalType::NonNullType(Box::new(ExternalType::ListType(
                Box::new(Self::translate_type(x)),
            ))),
        }
    }

    fn translate_meta(input: &MetaType) -> ExternalTypeDefinition<'static, String> {
        match input {
            MetaType::Scalar(x) => ExternalTypeDefinition::Scalar(ExternalScalarType {
                position: Pos::default(),
                description: x.description.as_ref().map(ToString::to_string),
                name: x.name.to_string(),
                directives: vec![],
            }),
            MetaType::Enum(x) => ExternalTypeDefinition::Enum(ExternalEnum {
                position: Pos::default(),
                description: x.description.as_ref().map(ToString::to_string),
                name: x.name.to_string(),
                directives: vec![],
                values: x.values.iter().map(Self::translate_enum_value).collect(),
            }),
            MetaType::Union(x) => ExternalTypeDefinition::Union(ExternalUnionType {
                position: Pos::default(),
                description: x.description.as_ref().map(ToString::to_string),
                name: x.name.to_string(),
                directives: vec![],
                types: x.of_type_names.iter().map(ToString::to_string).collect(),
            }),
            MetaType::Interface(x) => ExternalTypeDefinition::Interface(ExternalInterfaceType {
                position: Pos::default(),
                description: x.description.as_ref().map(ToString::to_string),
                name: x.name.to_string(),
                implements_interfaces: x.interface_names.iter().map(ToString::to_string).collect(),
                directives: vec![],
                fields: x
                    .fields
                    .iter()
                    .filter(|x| !x.is_builtin())
                    .map(Self::translate_field)
                    .collect(),
            }),
            MetaType::InputObject(x) => {
                ExternalTypeDefinition::InputObject(ExternalInputObjectType {
                    position: Pos::default(),
                    description: x.description.as_ref().map(ToString::to_string),
                    name: x.name.to_string(),
                    directives: vec![],
                    fields: x
                        .input_fields
                        .iter()
                        .filter(|x| !x.is_builtin())
                        .map(Self::translate_argument)
                        .collect(),
                })
            }
            MetaType::Object(x) => ExternalTypeDefinition::Object(ExternalObjectType {
                position: Pos::default(),
                description: x.description.as_ref().map(ToString::to_string),
                name: x.name.to_string(),
                directives: x.directives.iter().map(Self::translate_application).collect(),
                fields: x
                    .fields
                    .iter()
                    .filter(|x| !x.is_builtin())
                    .map(Self::translate_field)
                    .collect(),
                implements_interfaces: x.interface_names.iter().map(ToString::to_string).collect(),
            }),
        }
    }

    fn translate_enum_value(input: &EnumValue) -> ExternalEnumValue<'static, String> {
        ExternalEnumValue {
            position: Pos::default(),
            name: input.name.to_string(),
            description: input.description.as_ref().map(ToString::to_string),
            directives: generate_directives(&input.deprecation_status),
        }
    }

    fn translate_field(input: &Field) -> ExternalField<'static, String> {
        let arguments = input
            .arguments
            .as_ref()
            .map(|a| {
                a.iter()
                    .filter(|x| !x.is_builtin())
                    .map(Self::translate_argument)
                    .collect()
            })
            .unwrap_or_default();

        ExternalField {
            position: Pos::default(),
            name: input.name.to_string(),
            description: input.description.as_ref().map(ToString::to_string),
            directives: generate_directives(&input.deprecation_status),
            field_type: Self::translate_type(&input.field_type),
            arguments,
        }
    }

    fn translate_directive(input: &DirectiveType) -> ExternalDirectiveDefinition<'static, String> {
        ExternalDirectiveDefinition {
            position: Pos::default(),
            description: input.description.as_ref().map(ToString::to_string),
            name: input.name.to_string(),
            arguments: input.arguments.iter().map(Self::translate_argument).collect(),
            repeatable: input.is_repeatable,
            locations: input.locations.iter().map(|l| translate_location(*l)).collect(),
        }
    }

    fn translate_application(input: &DirectiveApplication) -> ExternalDirective<'static, String> {
        ExternalDirective {
            position: Pos::default(),
            name: input.name.to_string(),
            arguments: input
                .arguments
                .iter()
                .map(|(name, value)| (name.to_string(), Self::translate_value(value)))
                .collect(),
        }
    }
}

fn translate_location(location: DirectiveLocation) -> ExternalDirectiveLocation {
    match location {
        DirectiveLocation::Query => ExternalDirectiveLocation::Query,
        DirectiveLocation::Mutation => ExternalDirectiveLocation::Mutation,
        DirectiveLocation::Subscription => ExternalDirectiveLocation::Subscription,
        DirectiveLocation::Field => ExternalDirectiveLocation::Field,
        DirectiveLocation::FragmentDefinition => ExternalDirectiveLocation::FragmentDefinition,
        DirectiveLocation::FragmentSpread => ExternalDirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment => ExternalDirectiveLocation::InlineFragment,
        DirectiveLocation::VariableDefinition => ExternalDirectiveLocation::VariableDefinition,
        DirectiveLocation::Schema => ExternalDirectiveLocation::Schema,
        DirectiveLocation::Scalar => ExternalDirectiveLocation::Scalar,
        DirectiveLocation::Object => ExternalDirectiveLocation::Object,
        DirectiveLocation::FieldDefinition => ExternalDirectiveLocation::FieldDefinition,
        DirectiveLocation::ArgumentDefinition => ExternalDirectiveLocation::ArgumentDefinition,
        DirectiveLocation::Interface => ExternalDirectiveLocation::Interface,
        DirectiveLocation::Union => ExternalDirectiveLocation::Union,
        DirectiveLocation::Enum => ExternalDirectiveLocation::Enum,
        DirectiveLocation::EnumValue => ExternalDirectiveLocation::EnumValue,
        DirectiveLocation::InputObject => ExternalDirectiveLocation::InputObject,
        DirectiveLocation::InputFieldDefinition => ExternalDirectiveLocation::InputFieldDefinition,
    }
}

fn deprecation_to_directive(status: &DeprecationStatus) -> Option<ExternalDirective<'static, String>> {
    match status {
        DeprecationStatus::Current => None,
        DeprecationStatus::Deprecated(reason) => Some(ExternalDirective {
            position: Pos::default(),
            name: "deprecated".into(),
            arguments: reason
                .iter()
                .map(|rsn| ("reason".into(), ExternalValue::String(rsn.to_string())))
                .collect(),
        }),
    }
}

// Only `@deprecated` is generated for fields and enum values. `@skip`,
// `@include` and `@defer` are executable directives.
fn generate_directives(status: &DeprecationStatus) -> Vec<ExternalDirective<'static, String>> {
    deprecation_to_directive(status).into_iter().collect()
}
