use pretty_assertions::assert_eq;

use crate::{
    ast::InputValue,
    builder::SchemaBuilder,
    manifest::{HostType, Manifest},
    schema::{
        model::DirectiveLocation,
        printer::{PrintOptions, print_type},
    },
};

use super::fixtures::starwars::{STARWARS_SDL, starwars_builder};

#[test]
fn prints_starwars() {
    let schema = starwars_builder().unwrap().build().unwrap();

    assert_eq!(schema.as_schema_language(), STARWARS_SDL);
}

#[test]
fn prints_single_type() {
    let mut builder = SchemaBuilder::new();
    builder.schema().query("Point");
    builder
        .object(
            &Manifest::new("Point")
                .member("x", HostType::named("Int"))
                .member("y", HostType::named("Int")),
        )
        .unwrap();
    let schema = builder.build().unwrap();

    assert_eq!(
        print_type(schema.type_by_name("Point").unwrap()),
        "type Point {\n   x: Int!\n   y: Int!\n}",
    );
}

#[test]
fn internals_are_opt_in() {
    let schema = starwars_builder().unwrap().build().unwrap();

    let sdl = schema.as_schema_language_with(&PrintOptions::with_internals());
    assert!(sdl.contains("directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT"));
    assert!(sdl.contains("\"Built-in Char as Character\"\nscalar Char"));
    assert!(sdl.ends_with("\"Built-in ID\"\nscalar ID"));

    assert!(!schema.as_schema_language().contains("scalar Char"));
}

#[test]
fn prints_described_arguments_on_their_own_lines() {
    let mut builder = SchemaBuilder::new();
    builder.schema().query("Query");
    let query = builder
        .object(&Manifest::new("Query").member("greet", HostType::named("String")))
        .unwrap();
    let args = query
        .field("greet")
        .unwrap()
        .description("Says hello")
        .arguments(
            &Manifest::new("GreetArgs")
                .member("name", HostType::named("String"))
                .member("times", HostType::named("Int").nullable()),
        );
    args.argument("name").unwrap().description("Who to greet");
    args.argument("times").unwrap().default_value(1);
    builder
        .directive(&Manifest::new("Audit").member("by", HostType::named("String").nullable()))
        .unwrap()
        .repeatable()
        .on([DirectiveLocation::Object, DirectiveLocation::FieldDefinition]);
    let schema = builder.build().unwrap();

    assert_eq!(
        schema.as_schema_language(),
        r#"schema {
   query: Query
}

directive @audit(by: String) repeatable on OBJECT | FIELD_DEFINITION

type Query {
   "Says hello"
   greet(
      "Who to greet"
      name: String!
      times: Int = 1
   ): String!
}"#,
    );
}

#[test]
fn prints_enums_and_inputs() {
    let mut builder = SchemaBuilder::new();
    builder.schema().query("Query");
    builder
        .object(&Manifest::new("Query").member("ok", HostType::named("Boolean")))
        .unwrap();
    let color = builder
        .enumeration(&Manifest::new("Color").constant("RED").constant("GREEN"))
        .unwrap();
    color.value("GREEN").unwrap().deprecated(None);
    color.value("RED").unwrap().deprecated(Some("Too \"bright\""));
    builder
        .input_object(
            &Manifest::new("Paint")
                .member("color", HostType::named("Color"))
                .member("coats", HostType::list(HostType::named("Int"))),
        )
        .unwrap()
        .description("Paint\n\"\"\"job\"\"\"")
        .field("color")
        .unwrap()
        .default_value(InputValue::enum_value("GREEN"));
    let schema = builder.build().unwrap();

    assert_eq!(
        schema.as_schema_language(),
        r#"schema {
   query: Query
}

type Query {
   ok: Boolean!
}

enum Color {
   RED @deprecated(reason: "Too \"bright\"")
   GREEN @deprecated
}

"""
Paint
\"""job\"""
"""
input Paint {
   color: Color! = GREEN
   coats: [Int!]!
}"#,
    );
}

#[cfg(feature = "schema-language")]
#[test]
fn printed_schema_parses_back() {
    let schema = starwars_builder().unwrap().build().unwrap();

    let printed = schema.as_schema_language();
    let parsed = graphql_parser::parse_schema::<String>(&printed).unwrap();
    assert_eq!(parsed.to_string(), schema.as_document().to_string());
}
