//! Declarative construction of schemas.
//!
//! A [`SchemaBuilder`] collects type and directive declarations, each made
//! from a [`Manifest`] describing the host model. Declarations may reference
//! types declared later. [`SchemaBuilder::build`] assembles and validates
//! everything into a frozen [`SchemaType`].
//!
//! ```
//! use graphql_dsl::{HostType, Manifest, SchemaBuilder};
//!
//! let point = Manifest::new("Point")
//!     .member("x", HostType::named("Int"))
//!     .member("y", HostType::named("Int"));
//!
//! let mut builder = SchemaBuilder::new();
//! builder.schema().query("Point");
//! builder.object(&point)?.description("A point on a plane");
//!
//! let schema = builder.build()?;
//! assert_eq!(schema.query_type().fields.len(), 2);
//! # Ok::<_, graphql_dsl::BuildError>(())
//! ```

pub(crate) mod context;
mod directive;
mod enums;
mod error;
mod field;
mod input_object;
mod interface;
mod object;
mod scalar;
mod union;

use arcstr::ArcStr;
use indexmap::IndexMap;

use crate::{
    manifest::{Manifest, ModelHierarchy},
    schema::model::{DirectiveType, SchemaType},
    types::scalars,
};

pub use self::{
    context::BuilderContext,
    directive::{DirectiveApplicationBuilder, DirectiveTypeBuilder},
    enums::{EnumTypeBuilder, EnumValueBuilder},
    error::{BuildError, BuildResult},
    field::{ArgumentBuilder, FieldArgumentsBuilder, FieldBuilder, InputFieldBuilder, ObjectFieldBuilder},
    input_object::InputObjectTypeBuilder,
    interface::InterfaceTypeBuilder,
    object::ObjectTypeBuilder,
    scalar::ScalarTypeBuilder,
    union::UnionTypeBuilder,
};

/// Root operation types of a schema under construction.
#[derive(Clone, Debug, Default)]
pub struct RootOperations {
    pub(crate) query: Option<ArcStr>,
    pub(crate) mutation: Option<ArcStr>,
    pub(crate) subscription: Option<ArcStr>,
}

impl RootOperations {
    /// Names the object type serving queries.
    pub fn query(&mut self, name: impl Into<ArcStr>) -> &mut Self {
        self.query = Some(name.into());
        self
    }

    /// Names the object type serving mutations.
    pub fn mutation(&mut self, name: impl Into<ArcStr>) -> &mut Self {
        self.mutation = Some(name.into());
        self
    }

    /// Names the object type serving subscriptions.
    pub fn subscription(&mut self, name: impl Into<ArcStr>) -> &mut Self {
        self.subscription = Some(name.into());
        self
    }
}

#[derive(Clone, Debug)]
enum TypeBuilder {
    Scalar(ScalarTypeBuilder),
    Object(ObjectTypeBuilder),
    Interface(InterfaceTypeBuilder),
    Union(UnionTypeBuilder),
    Enum(EnumTypeBuilder),
    InputObject(InputObjectTypeBuilder),
}

/// Top level builder of a schema.
#[derive(Clone, Debug, Default)]
pub struct SchemaBuilder {
    roots: RootOperations,
    types: IndexMap<ArcStr, TypeBuilder>,
    directives: IndexMap<ArcStr, DirectiveTypeBuilder>,
    models: ModelHierarchy,
}

macro_rules! declare {
    ($self:ident, $name:expr, $variant:ident($builder:expr) $(, models: $manifest:expr)?) => {{
        let name: ArcStr = $name;
        if $self.types.contains_key(&name) || scalars::is_builtin_scalar(&name) {
            return Err(BuildError::DuplicateDefinition { name });
        }
        $($self.models.record($manifest);)?
        match $self.types.entry(name).or_insert(TypeBuilder::$variant($builder)) {
            TypeBuilder::$variant(b) => Ok(b),
            _ => unreachable!("type builder was just inserted"),
        }
    }};
}

impl SchemaBuilder {
    /// Starts an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the root operation types.
    pub fn schema(&mut self) -> &mut RootOperations {
        &mut self.roots
    }

    /// Declares a custom scalar named `name`.
    pub fn scalar(&mut self, name: impl Into<ArcStr>) -> BuildResult<&mut ScalarTypeBuilder> {
        let name = name.into();
        declare!(self, name.clone(), Scalar(ScalarTypeBuilder::new(name)))
    }

    /// Declares an object type from `manifest`.
    pub fn object(&mut self, manifest: &Manifest) -> BuildResult<&mut ObjectTypeBuilder> {
        declare!(
            self,
            manifest.name().clone(),
            Object(ObjectTypeBuilder::new(manifest)),
            models: manifest
        )
    }

    /// Declares an interface type from `manifest`.
    pub fn interface(&mut self, manifest: &Manifest) -> BuildResult<&mut InterfaceTypeBuilder> {
        declare!(
            self,
            manifest.name().clone(),
            Interface(InterfaceTypeBuilder::new(manifest)),
            models: manifest
        )
    }

    /// Declares a union type named `name`.
    pub fn union(&mut self, name: impl Into<ArcStr>) -> BuildResult<&mut UnionTypeBuilder> {
        let name = name.into();
        declare!(self, name.clone(), Union(UnionTypeBuilder::new(name)))
    }

    /// Declares an enumeration type from the constants of `manifest`.
    pub fn enumeration(&mut self, manifest: &Manifest) -> BuildResult<&mut EnumTypeBuilder> {
        declare!(self, manifest.name().clone(), Enum(EnumTypeBuilder::new(manifest)))
    }

    /// Declares an input object type from `manifest`.
    pub fn input_object(&mut self, manifest: &Manifest) -> BuildResult<&mut InputObjectTypeBuilder> {
        declare!(
            self,
            manifest.name().clone(),
            InputObject(InputObjectTypeBuilder::new(manifest)),
            models: manifest
        )
    }

    /// Declares a directive from `manifest`.
    pub fn directive(&mut self, manifest: &Manifest) -> BuildResult<&mut DirectiveTypeBuilder> {
        let builder = DirectiveTypeBuilder::new(manifest);
        let name = builder.name().clone();
        if self.directives.contains_key(&name) || DirectiveType::is_builtin_name(&name) {
            return Err(BuildError::DuplicateDefinition { name });
        }
        Ok(self.directives.entry(name).or_insert(builder))
    }

    /// Assembles and validates the declared schema.
    ///
    /// Types are built in declaration order, then directives. Built-in
    /// scalars and directives are added, root operations resolved and the
    /// whole graph validated. The first error aborts the build.
    pub fn build(self) -> BuildResult<SchemaType> {
        let span = tracing::debug_span!("build_schema", types = self.types.len());
        let _enter = span.enter();

        let mut ctx = BuilderContext::new(self.models);
        for (name, builder) in self.types {
            tracing::trace!(name = %name, "building type");
            let meta = match builder {
                TypeBuilder::Scalar(b) => b.build(&mut ctx),
                TypeBuilder::Object(b) => b.build(&mut ctx),
                TypeBuilder::Interface(b) => b.build(&mut ctx),
                TypeBuilder::Union(b) => b.build(&mut ctx),
                TypeBuilder::Enum(b) => b.build(),
                TypeBuilder::InputObject(b) => b.build(&mut ctx),
            }?;
            ctx.register_type(meta)?;
        }
        for builder in self.directives.into_values() {
            let directive = builder.build(&mut ctx)?;
            ctx.register_directive(directive)?;
        }

        ctx.freeze(self.roots)
    }
}

/// Looks up the member builder `name` of `owner`.
fn member_mut<'b, T>(
    members: &'b mut IndexMap<ArcStr, T>,
    owner: &str,
    name: &str,
) -> BuildResult<&'b mut T> {
    members.get_mut(name).ok_or_else(|| BuildError::UnknownField {
        owner: owner.into(),
        field: name.into(),
    })
}
