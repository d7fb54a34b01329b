use pretty_assertions::assert_eq;

use crate::{
    ast::{InputValue, Type},
    builder::{BuildError, SchemaBuilder},
    manifest::{HostType, Manifest},
    schema::{
        code_registry::CoercionError,
        meta::MetaType,
        model::{DirectiveLocation, OperationType},
    },
    types::scalars::BUILTIN_SCALARS,
    value::{Object, ScalarValue, Value},
};

use super::fixtures::starwars::{self, starwars_builder};

fn point() -> Manifest {
    Manifest::new("Point")
        .member("x", HostType::named("Int"))
        .member("y", HostType::named("Int"))
}

fn point_builder() -> SchemaBuilder {
    let mut builder = SchemaBuilder::new();
    builder.schema().query("Point");
    builder.object(&point()).expect("Point is declared once");
    builder
}

#[test]
fn builtins_are_always_present() {
    let schema = point_builder().build().unwrap();

    assert_eq!(schema.type_count(), BUILTIN_SCALARS.len() + 1);
    for (name, description) in BUILTIN_SCALARS {
        let t = schema.type_by_name(name).unwrap();
        assert!(matches!(t, MetaType::Scalar(_)), "{name} is a scalar");
        assert_eq!(t.description().map(|d| d.as_str()), Some(description));
        assert!(schema.code_registry().scalar_coercion(name).is_some());
    }
    for directive in ["skip", "include", "defer"] {
        assert!(schema.directive_by_name(directive).unwrap().is_builtin());
    }
}

#[test]
fn starwars_builds() {
    let schema = starwars_builder().unwrap().build().unwrap();

    assert_eq!(schema.type_count(), BUILTIN_SCALARS.len() + 7);
    assert_eq!(schema.query_type().name, "Query");
    assert!(schema.mutation_type().is_none());
    assert_eq!(schema.root_type_name(OperationType::Query).map(|n| n.as_str()), Some("Query"));

    let hero = schema.query_type().fields.iter().find(|f| f.name == "hero").unwrap();
    assert_eq!(hero.field_type, Type::Named("Character".into()));
    let episode = hero.argument_by_name("episode").unwrap();
    assert_eq!(episode.default_value, Some(InputValue::enum_value("NEWHOPE")));

    let directive = schema.directive_by_name("cacheControl").unwrap();
    assert!(directive.allows(DirectiveLocation::Object));
    assert!(!directive.allows(DirectiveLocation::FieldDefinition));

    let human = schema.object_by_name("Human").unwrap();
    assert_eq!(human.directives.len(), 1);
    assert_eq!(
        human.directives[0].argument("maxAge"),
        Some(&InputValue::scalar(60_i64)),
    );
    assert_eq!(schema.code_registry().field_resolver_count(), 2);
}

#[test]
fn types_are_declared_once() {
    let mut builder = point_builder();
    assert_eq!(
        builder.object(&point()).err(),
        Some(BuildError::DuplicateDefinition { name: "Point".into() }),
    );
    assert_eq!(
        builder.scalar("Int").err(),
        Some(BuildError::DuplicateDefinition { name: "Int".into() }),
    );
    assert_eq!(
        builder.directive(&Manifest::new("Skip")).err(),
        Some(BuildError::DuplicateDefinition { name: "skip".into() }),
    );
}

#[test]
fn rejected_declarations_leave_no_models() {
    let mut builder = point_builder();
    builder
        .object(&Manifest::new("Human").member("name", HostType::named("String")))
        .unwrap();
    builder
        .interface(&Manifest::new("Villain").member("name", HostType::named("String")))
        .unwrap();
    assert_eq!(
        builder
            .interface(&Manifest::new("Human").extends("Villain"))
            .err(),
        Some(BuildError::DuplicateDefinition { name: "Human".into() }),
    );
    assert_eq!(
        builder
            .input_object(&Manifest::new("Point").extends("Villain"))
            .err(),
        Some(BuildError::DuplicateDefinition { name: "Point".into() }),
    );

    let schema = builder.build().unwrap();
    assert!(!schema.models().is_subtype("Human", "Villain"));
    assert!(!schema.models().is_subtype("Point", "Villain"));
    let human = Value::object(Object::of_model("Human"));
    assert!(schema.resolve_abstract_type("Villain", &human).is_none());
}

#[test]
fn unknown_members_cannot_be_customized() {
    let mut builder = point_builder();
    let err = builder.object(&Manifest::new("Line")).unwrap().field("z").err();
    assert_eq!(
        err,
        Some(BuildError::UnknownField {
            owner: "Line".into(),
            field: "z".into(),
        }),
    );

    let err = builder
        .directive(&starwars::cache_control())
        .unwrap()
        .argument("minAge")
        .err();
    assert_eq!(
        err,
        Some(BuildError::UnknownField {
            owner: "@cacheControl".into(),
            field: "minAge".into(),
        }),
    );
}

#[test]
fn scalars_need_both_coercions() {
    let mut builder = point_builder();
    builder.scalar("Date").unwrap().serializer(|v| Ok(v.clone()));

    let err = builder.build().unwrap_err();
    assert_eq!(
        err,
        BuildError::MissingCoercion {
            scalar: "Date".into(),
            missing: "deserialize",
        },
    );
    assert_eq!(
        err.to_string(),
        "The deserialize method must be defined for scalar type 'Date'",
    );
}

#[test]
fn custom_scalars_coerce() {
    let mut builder = point_builder();
    builder
        .scalar("Upper")
        .unwrap()
        .serializer(|v| match v.as_scalar().and_then(ScalarValue::as_str) {
            Some(s) => Ok(Value::scalar(s.to_uppercase())),
            None => Err(CoercionError::invalid("Expected a string").into()),
        })
        .deserializer(|v| match v.as_scalar().and_then(ScalarValue::as_str) {
            Some(s) if s.chars().all(char::is_uppercase) => Ok(v.clone()),
            _ => Err("not upper case".into()),
        });
    let schema = builder.build().unwrap();

    let upper = schema.code_registry().scalar_coercion("Upper").unwrap();
    assert_eq!(upper.serialize(&Value::scalar("abc")), Ok(Value::scalar("ABC")));
    assert_eq!(upper.parse_literal(&InputValue::scalar("ABC")), Ok(Value::scalar("ABC")));
    assert_eq!(
        upper.serialize(&Value::scalar(1)).unwrap_err(),
        CoercionError::invalid("Expected a string"),
    );
    assert_eq!(
        upper.parse_value(&Value::scalar("abc")).unwrap_err().to_string(),
        r#"Error trying to parse value ("abc") for scalar type 'Upper': not upper case"#,
    );
}

#[test]
fn directives_need_a_location() {
    let mut builder = point_builder();
    builder.directive(&Manifest::new("Audit")).unwrap();

    assert_eq!(
        builder.build().unwrap_err(),
        BuildError::NoLocation { directive: "audit".into() },
    );
}

#[test]
fn unions_need_members() {
    let mut builder = point_builder();
    builder.union("Nothing").unwrap();

    assert_eq!(
        builder.build().unwrap_err(),
        BuildError::EmptyUnion { union: "Nothing".into() },
    );
}

#[test]
fn types_need_members() {
    let cases: [(&str, fn(&mut SchemaBuilder, &Manifest)); 4] = [
        ("type", |b, m| {
            b.object(m).unwrap();
        }),
        ("interface", |b, m| {
            b.interface(m).unwrap();
        }),
        ("input", |b, m| {
            b.input_object(m).unwrap();
        }),
        ("enum", |b, m| {
            b.enumeration(m).unwrap();
        }),
    ];
    for (kind, declare) in cases {
        let mut builder = point_builder();
        declare(&mut builder, &Manifest::new("Empty"));

        let err = builder.build().unwrap_err();
        let BuildError::EmptyType { kind: actual, name, member } = &err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(actual.to_string(), kind);
        assert_eq!(name, "Empty");
        assert_eq!(*member, if kind == "enum" { "value" } else { "field" });
    }

    let mut builder = point_builder();
    builder.object(&Manifest::new("Empty")).unwrap();
    assert_eq!(
        builder.build().unwrap_err().to_string(),
        "The type 'Empty' must define at least one field",
    );
}

#[test]
fn union_members_replace() {
    let mut builder = point_builder();
    for name in ["C", "D"] {
        builder
            .object(&Manifest::new(name).member("id", HostType::named("ID")))
            .unwrap();
    }
    builder.union("U").unwrap().of(["Point"]).of(["C", "D"]);

    let schema = builder.build().unwrap();
    let MetaType::Union(u) = schema.type_by_name("U").unwrap() else {
        panic!("U is a union");
    };
    assert_eq!(u.of_type_names, ["C", "D"]);
}

#[test]
fn union_members_must_be_objects() {
    let mut builder = point_builder();
    builder.enumeration(&starwars::episode()).unwrap();
    builder.union("U").unwrap().of(["Episode"]);

    assert!(matches!(
        builder.build().unwrap_err(),
        BuildError::NotAnObjectType { name, .. } if name == "Episode",
    ));
}

#[test]
fn query_root_is_required() {
    let mut builder = SchemaBuilder::new();
    builder.object(&point()).unwrap();
    assert_eq!(builder.build().unwrap_err(), BuildError::MissingQueryType);

    let mut builder = point_builder();
    builder.schema().mutation("Mutation");
    assert_eq!(
        builder.build().unwrap_err(),
        BuildError::UndeclaredRootType {
            operation: OperationType::Mutation,
            name: "Mutation".into(),
        },
    );

    let mut builder = point_builder();
    builder.enumeration(&starwars::episode()).unwrap();
    builder.schema().query("Episode");
    assert!(matches!(
        builder.build().unwrap_err(),
        BuildError::NotAnObjectType { name, .. } if name == "Episode",
    ));
}

#[test]
fn references_must_resolve() {
    let mut builder = point_builder();
    builder
        .object(&Manifest::new("Line").member("from", HostType::named("Pointt")))
        .unwrap();

    assert_eq!(
        builder.build().unwrap_err(),
        BuildError::UnresolvedTypeReference {
            name: "Pointt".into(),
            referrer: "Line.from".into(),
        },
    );
}

#[test]
fn forward_references_resolve() {
    let mut builder = SchemaBuilder::new();
    builder.schema().query("Query");
    builder
        .object(&Manifest::new("Query").member("line", HostType::named("Line").nullable()))
        .unwrap();
    builder
        .object(&Manifest::new("Line").member("to", HostType::named("Point")))
        .unwrap();
    builder.object(&point()).unwrap();

    assert!(builder.build().is_ok());
}

#[test]
fn implemented_types_must_be_interfaces() {
    let mut builder = point_builder();
    builder.object(&Manifest::new("C")).unwrap().implement(["Point"]);

    assert_eq!(
        builder.build().unwrap_err(),
        BuildError::NotAnInterfaceType {
            name: "Point".into(),
            implementor: "C".into(),
        },
    );
}

#[test]
fn input_objects_are_inputs_only() {
    let mut builder = point_builder();
    builder.input_object(&Manifest::new("PointInput")).unwrap();
    builder
        .object(&Manifest::new("Line").member("from", HostType::named("PointInput")))
        .unwrap();

    assert_eq!(
        builder.build().unwrap_err(),
        BuildError::InvalidTypePosition {
            name: "PointInput".into(),
            referrer: "Line.from".into(),
            expected: "output",
        },
    );
}

#[test]
fn default_values_are_type_checked() {
    let mut builder = point_builder();
    builder
        .object(&Manifest::new("Calc").member("add", HostType::named("Int")))
        .unwrap()
        .field("add")
        .unwrap()
        .arguments(&Manifest::new("AddArgs").member("x", HostType::named("Int")))
        .argument("x")
        .unwrap()
        .default_value("hello");

    let err = builder.build().unwrap_err();
    let BuildError::DefaultValueType { owner, expected, value, .. } = err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(owner, "Calc.add(x)");
    assert_eq!(expected, "Int!");
    assert_eq!(value, r#""hello""#);
}

#[test]
fn input_object_defaults_are_type_checked() {
    let mut builder = point_builder();
    builder
        .input_object(&Manifest::new("Range").member("from", HostType::named("Int")))
        .unwrap();
    builder
        .input_object(&Manifest::new("Filter").member("range", HostType::named("Range")))
        .unwrap()
        .field("range")
        .unwrap()
        .default_value(InputValue::object(
            [("to", InputValue::scalar(3_i64))].into_iter().collect(),
        ));

    let err = builder.build().unwrap_err();
    let BuildError::DefaultValueType { owner, reason, .. } = err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(owner, "Filter.range");
    assert_eq!(reason, r#"In field "from": Expected "Int!", found null"#);
}

fn tagged_builder(locations: &[DirectiveLocation]) -> SchemaBuilder {
    let mut builder = point_builder();
    if !locations.is_empty() {
        builder
            .directive(&starwars::cache_control())
            .unwrap()
            .on(locations.iter().copied());
    }
    builder
}

#[test]
fn directive_applications_are_checked() {
    let mut builder = tagged_builder(&[]);
    builder
        .object(&Manifest::new("C"))
        .unwrap()
        .directive(&starwars::cache_control())
        .argument("maxAge", 60)
        .unwrap();
    assert_eq!(
        builder.build().unwrap_err(),
        BuildError::UnknownDirective {
            name: "cacheControl".into(),
            referrer: "C".into(),
        },
    );

    let mut builder = tagged_builder(&[DirectiveLocation::FieldDefinition]);
    builder
        .object(&Manifest::new("C"))
        .unwrap()
        .directive(&starwars::cache_control());
    assert_eq!(
        builder.build().unwrap_err(),
        BuildError::MisplacedDirective {
            directive: "cacheControl".into(),
            location: DirectiveLocation::Object,
            referrer: "C".into(),
        },
    );

    let mut builder = tagged_builder(&[DirectiveLocation::Object]);
    builder
        .object(&Manifest::new("C"))
        .unwrap()
        .directive(&starwars::cache_control())
        .argument("maxAge", "soon")
        .unwrap();
    let err = builder.build().unwrap_err();
    let BuildError::ArgumentValueType { owner, value, .. } = err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(owner, "@cacheControl(maxAge) on C");
    assert_eq!(value, r#""soon""#);

    let mut builder = tagged_builder(&[DirectiveLocation::Object]);
    builder
        .object(&Manifest::new("C"))
        .unwrap()
        .directive(&starwars::cache_control());
    let err = builder.build().unwrap_err();
    let BuildError::ArgumentValueType { reason, .. } = err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(reason, r#"Expected "Int!", found null"#);
}
