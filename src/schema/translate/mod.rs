use crate::schema::model::SchemaType;

#[cfg_attr(not(feature = "schema-language"), expect(dead_code, reason = "no translator enabled"))]
pub(crate) trait SchemaTranslator<T> {
    fn translate_schema(s: &SchemaType) -> T;
}

#[cfg(feature = "schema-language")]
pub mod graphql_parser;
