#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod ast;
pub mod builder;
pub mod executor;
pub mod integrations;
pub mod manifest;
pub mod schema;
pub mod types;
pub mod util;
mod validation;
pub mod value;

#[cfg(test)]
mod tests;

#[doc(inline)]
pub use futures::future::BoxFuture;

pub use crate::{
    ast::{InputValue, Type},
    builder::{
        ArgumentBuilder, BuildError, BuildResult, BuilderContext, DirectiveApplicationBuilder,
        DirectiveTypeBuilder, EnumTypeBuilder, EnumValueBuilder, FieldArgumentsBuilder,
        FieldBuilder, InputFieldBuilder, InputObjectTypeBuilder, InterfaceTypeBuilder,
        ObjectFieldBuilder, ObjectTypeBuilder, RootOperations, ScalarTypeBuilder, SchemaBuilder,
        UnionTypeBuilder,
    },
    executor::{Arguments, Environment, FieldError, FieldResult, Resolution, ResolverFn},
    manifest::{HostType, Manifest, Member, ModelHierarchy},
    schema::{
        code_registry::{CodeRegistry, CoercionError, CoercionErrorKind, CoercionPhase, ScalarCoercion},
        meta::{self, MetaType},
        model::{DirectiveApplication, DirectiveLocation, DirectiveType, OperationType, SchemaType},
        printer::{PrintOptions, print_schema, print_type},
        resolve_type::{InterfaceTypeResolver, ResolveType, UnionTypeResolver},
    },
    value::{Object, ScalarValue, Value},
};
