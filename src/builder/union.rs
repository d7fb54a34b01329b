use std::sync::Arc;

use arcstr::ArcStr;
use derive_more::with_trait::Debug;
use indexmap::IndexSet;

use crate::{
    ast::Type,
    builder::{BuildError, BuildResult, context::BuilderContext},
    schema::{
        meta::{MetaType, UnionMeta},
        resolve_type::{ResolveType, UnionTypeResolver},
    },
};

/// Declares a union type.
///
/// Values returned from union typed fields are mapped onto members by a
/// [`UnionTypeResolver`] unless another resolver is given.
#[derive(Clone, Debug)]
pub struct UnionTypeBuilder {
    name: ArcStr,
    description: Option<ArcStr>,
    members: IndexSet<ArcStr>,
    #[debug(skip)]
    type_resolver: Option<Arc<dyn ResolveType>>,
}

impl UnionTypeBuilder {
    pub(crate) fn new(name: ArcStr) -> Self {
        Self {
            name,
            description: None,
            members: IndexSet::new(),
            type_resolver: None,
        }
    }

    /// Name of the declared type.
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// Sets the description of the type.
    pub fn description(&mut self, description: impl Into<ArcStr>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the member object types.
    ///
    /// Replaces previously set members.
    pub fn of<I, N>(&mut self, members: I) -> &mut Self
    where
        I: IntoIterator<Item = N>,
        N: Into<ArcStr>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the default type resolver.
    pub fn type_resolver(&mut self, resolver: impl ResolveType + 'static) -> &mut Self {
        self.type_resolver = Some(Arc::new(resolver));
        self
    }

    pub(crate) fn build(self, ctx: &mut BuilderContext) -> BuildResult<MetaType> {
        if self.members.is_empty() {
            return Err(BuildError::EmptyUnion { union: self.name });
        }

        for member in &self.members {
            ctx.resolve_type_reference(Type::Named(member.clone()), self.name.as_str());
        }

        let resolver = self
            .type_resolver
            .unwrap_or_else(|| Arc::new(UnionTypeResolver::new(self.members.iter().cloned())));
        ctx.register_type_resolver(self.name.clone(), resolver);

        let mut meta = UnionMeta::new(self.name, self.members.into_iter().collect());
        meta.description = self.description;
        Ok(meta.into_meta())
    }
}
