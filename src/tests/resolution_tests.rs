use arcstr::ArcStr;
use indexmap::IndexMap;
use pretty_assertions::assert_eq;

use crate::{
    ast::InputValue,
    builder::SchemaBuilder,
    executor::{Arguments, Environment, Resolution},
    manifest::{HostType, Manifest},
    schema::{meta::ObjectMeta, model::SchemaType, resolve_type::ResolveType},
    value::{Object, Value},
};

use super::fixtures::starwars::{self, luke, r2d2, starwars_builder};

fn build_starwars() -> SchemaType {
    starwars_builder().unwrap().build().unwrap()
}

fn call(
    schema: &SchemaType,
    owner: &str,
    field: &str,
    parent: &Value,
    args: &[(&str, InputValue)],
) -> Resolution {
    let meta_args = schema
        .type_by_name(owner)
        .and_then(|t| t.field_by_name(field))
        .and_then(|f| f.arguments.as_deref());
    let provided = args
        .iter()
        .map(|(n, v)| (ArcStr::from(*n), v.clone()))
        .collect::<IndexMap<_, _>>();
    let env = Environment {
        parent,
        schema,
        owner,
        field_name: field,
    };
    schema
        .code_registry()
        .resolve_field(&env, &Arguments::new(provided, meta_args))
}

#[tokio::test]
async fn resolvers_receive_defaults() {
    let schema = build_starwars();

    let hero = call(&schema, "Query", "hero", &Value::Null, &[]).resolve().await;
    assert_eq!(hero, Ok(luke()));

    let hero = call(
        &schema,
        "Query",
        "hero",
        &Value::Null,
        &[("episode", InputValue::enum_value("EMPIRE"))],
    )
    .resolve()
    .await;
    assert_eq!(hero, Ok(r2d2()));
}

#[tokio::test]
async fn deferred_resolvers_are_awaited() {
    let schema = build_starwars();

    let res = call(
        &schema,
        "Query",
        "search",
        &Value::Null,
        &[("text", InputValue::scalar("r2"))],
    );
    assert!(!res.is_ready());
    assert_eq!(res.resolve().await, Ok(Value::list(vec![luke(), r2d2()])));

    let res = call(
        &schema,
        "Query",
        "search",
        &Value::Null,
        &[("text", InputValue::scalar(""))],
    );
    let err = res.resolve().await.unwrap_err();
    assert_eq!(err.message(), "Cannot search for nothing");
}

#[tokio::test]
async fn fields_default_to_parent_values() {
    let schema = build_starwars();

    let name = call(&schema, "Human", "name", &luke(), &[]).resolve().await;
    assert_eq!(name, Ok(Value::scalar("Luke Skywalker")));

    let missing = call(&schema, "Droid", "name", &Value::object(Object::of_model("Droid")), &[])
        .resolve()
        .await;
    assert_eq!(missing, Ok(Value::Null));

    let err = call(&schema, "Droid", "name", &Value::scalar(3), &[])
        .resolve()
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Cannot read field `Droid.name` of non-object value 3");
}

#[test]
fn unions_resolve_their_exact_members() {
    let schema = build_starwars();

    let resolved = schema.resolve_abstract_type("SearchResult", &r2d2());
    assert_eq!(resolved.map(|o| o.name.as_str()), Some("Droid"));

    let resolved = schema.resolve_abstract_type("SearchResult", &luke());
    assert_eq!(resolved.map(|o| o.name.as_str()), Some("Human"));

    let untagged = Value::object(Object::default().field("id", "1000"));
    assert!(schema.resolve_abstract_type("SearchResult", &untagged).is_none());
    assert!(schema.resolve_abstract_type("SearchResult", &Value::scalar("Human")).is_none());
}

#[test]
fn interfaces_resolve_transitive_subtypes() {
    let schema = build_starwars();

    // Droid extends Machine, which extends Character.
    let resolved = schema.resolve_abstract_type("Character", &r2d2());
    assert_eq!(resolved.map(|o| o.name.as_str()), Some("Droid"));
    let resolved = schema.resolve_abstract_type("Machine", &r2d2());
    assert_eq!(resolved.map(|o| o.name.as_str()), Some("Droid"));

    assert!(schema.resolve_abstract_type("Machine", &luke()).is_none());
}

#[test]
fn possible_types_follow_declarations() {
    let schema = build_starwars();

    let names = |t: &str| {
        schema
            .possible_types(schema.type_by_name(t).unwrap())
            .into_iter()
            .map(|o| o.name.to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(names("SearchResult"), ["Human", "Droid"]);
    assert_eq!(names("Character"), ["Human", "Droid"]);
    assert_eq!(names("Machine"), ["Droid"]);
}

#[test]
fn union_resolution_ignores_subtypes() {
    let droid = starwars::droid();
    let mut builder = SchemaBuilder::new();
    builder.schema().query("Droid");
    builder.object(&droid).unwrap();
    builder
        .object(
            &Manifest::new("R2")
                .extends("Droid")
                .member("serial", HostType::named("Int")),
        )
        .unwrap();
    builder.union("Machines").unwrap().of(["Droid"]);
    let schema = builder.build().unwrap();

    let r2 = Value::object(Object::of_model("R2"));
    assert!(schema.models().is_subtype("R2", "Droid"));
    assert!(schema.resolve_abstract_type("Machines", &r2).is_none());
}

struct Fixed(&'static str);

impl ResolveType for Fixed {
    fn resolve_type<'s>(&self, _: &Value, schema: &'s SchemaType) -> Option<&'s ObjectMeta> {
        schema.object_by_name(self.0)
    }
}

#[test]
fn custom_type_resolvers_replace_defaults() {
    let mut builder = SchemaBuilder::new();
    builder.schema().query("Query");
    builder
        .object(&Manifest::new("Query").member("pet", HostType::named("Pet").nullable()))
        .unwrap();
    for pet in ["Cat", "Dog"] {
        builder
            .object(&Manifest::new(pet).member("name", HostType::named("String")))
            .unwrap();
    }
    builder
        .union("Pet")
        .unwrap()
        .of(["Cat", "Dog"])
        .type_resolver(Fixed("Dog"));
    let schema = builder.build().unwrap();

    let cat = Value::object(Object::of_model("Cat"));
    let resolved = schema.resolve_abstract_type("Pet", &cat);
    assert_eq!(resolved.map(|o| o.name.as_str()), Some("Dog"));
}
