//! A small Star Wars schema exercising every kind of declaration.

use crate::{
    ast::InputValue,
    builder::{BuildResult, SchemaBuilder},
    executor::Resolution,
    manifest::{HostType, Manifest},
    schema::model::DirectiveLocation,
    value::{Object, ScalarValue, Value},
};

pub(crate) fn character() -> Manifest {
    Manifest::new("Character")
        .member("id", HostType::named("ID"))
        .member("name", HostType::named("String").nullable())
}

pub(crate) fn machine() -> Manifest {
    Manifest::new("Machine")
        .extends("Character")
        .member("id", HostType::named("ID"))
        .member("name", HostType::named("String").nullable())
        .member("primaryFunction", HostType::named("String").nullable())
}

pub(crate) fn human() -> Manifest {
    Manifest::new("Human")
        .extends("Character")
        .member("id", HostType::named("ID"))
        .member("name", HostType::named("String").nullable())
        .member("homePlanet", HostType::named("String").nullable())
}

pub(crate) fn droid() -> Manifest {
    Manifest::new("Droid")
        .extends("Machine")
        .member("id", HostType::named("ID"))
        .member("name", HostType::named("String").nullable())
        .member("primaryFunction", HostType::named("String").nullable())
}

pub(crate) fn episode() -> Manifest {
    Manifest::new("Episode")
        .constant("NEWHOPE")
        .constant("EMPIRE")
        .constant("JEDI")
}

pub(crate) fn query() -> Manifest {
    Manifest::new("Query")
        .member("hero", HostType::named("Character").nullable())
        .member("search", HostType::list(HostType::named("SearchResult")))
}

pub(crate) fn cache_control() -> Manifest {
    Manifest::new("CacheControl").member("maxAge", HostType::named("Int"))
}

pub(crate) fn luke() -> Value {
    Value::object(
        Object::of_model("Human")
            .field("id", "1000")
            .field("name", "Luke Skywalker")
            .field("homePlanet", "Tatooine"),
    )
}

pub(crate) fn r2d2() -> Value {
    Value::object(
        Object::of_model("Droid")
            .field("id", "2001")
            .field("name", "R2-D2")
            .field("primaryFunction", "Astromech"),
    )
}

/// Declares the whole schema without building it.
pub(crate) fn starwars_builder() -> BuildResult<SchemaBuilder> {
    let mut builder = SchemaBuilder::new();
    builder.schema().query("Query");

    let query = builder.object(&query())?;
    query
        .field("hero")?
        .resolver(|_, args| match args.get("episode") {
            Some(Value::Scalar(ScalarValue::String(e))) if e == "EMPIRE" => {
                Resolution::ready(r2d2())
            }
            _ => Resolution::ready(luke()),
        })
        .arguments(&Manifest::new("HeroArgs").member("episode", HostType::named("Episode").nullable()))
        .argument("episode")?
        .default_value(InputValue::enum_value("NEWHOPE"));
    query
        .field("search")?
        .resolver(|_, args| {
            let text = args.get("text").unwrap_or_default();
            Resolution::deferred(async move {
                match text.as_scalar().and_then(ScalarValue::as_str) {
                    Some("") => Err("Cannot search for nothing".into()),
                    _ => Ok(Value::list(vec![luke(), r2d2()])),
                }
            })
        })
        .arguments(&Manifest::new("SearchArgs").member("text", HostType::named("String")));

    builder
        .interface(&character())?
        .description("A character\nin the Star Wars trilogy");
    builder.interface(&machine())?.implement(["Character"]);

    let human = builder.object(&human())?;
    human
        .implement(["Character"])
        .directive(&cache_control())
        .argument("maxAge", 60)?;
    human.field("homePlanet")?.deprecated(Some("Use `origin`"));

    builder.object(&droid())?.implement(["Character", "Machine"]);
    builder.union("SearchResult")?.of(["Human", "Droid"]);

    builder
        .enumeration(&episode())?
        .value("JEDI")?
        .description("Released in 1983");

    builder
        .directive(&cache_control())?
        .description("Controls caching of the annotated type")
        .on([DirectiveLocation::Object]);

    Ok(builder)
}

pub(crate) const STARWARS_SDL: &str = r#"schema {
   query: Query
}

"Controls caching of the annotated type"
directive @cacheControl(maxAge: Int!) on OBJECT

type Query {
   hero(episode: Episode = NEWHOPE): Character
   search(text: String!): [SearchResult!]!
}

"""
A character
in the Star Wars trilogy
"""
interface Character {
   id: ID!
   name: String
}

interface Machine implements Character {
   id: ID!
   name: String
   primaryFunction: String
}

type Human implements Character @cacheControl(maxAge: 60) {
   id: ID!
   name: String
   homePlanet: String @deprecated(reason: "Use `origin`")
}

type Droid implements Character & Machine {
   id: ID!
   name: String
   primaryFunction: String
}

union SearchResult = Human | Droid

enum Episode {
   NEWHOPE
   EMPIRE
   "Released in 1983"
   JEDI
}"#;
