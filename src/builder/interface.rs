use std::sync::Arc;

use arcstr::ArcStr;
use derive_more::with_trait::Debug;
use indexmap::{IndexMap, IndexSet};

use crate::{
    builder::{BuildResult, context::BuilderContext, field::FieldBuilder, member_mut},
    manifest::Manifest,
    schema::{
        meta::{InterfaceMeta, MetaType},
        resolve_type::{InterfaceTypeResolver, ResolveType},
    },
};

/// Declares an interface type from the manifest of its model.
///
/// Interface fields carry no resolvers. Values returned from interface
/// typed fields are mapped onto object types by an [`InterfaceTypeResolver`]
/// unless another resolver is given.
#[derive(Clone, Debug)]
pub struct InterfaceTypeBuilder {
    name: ArcStr,
    description: Option<ArcStr>,
    fields: IndexMap<ArcStr, FieldBuilder>,
    interfaces: IndexSet<ArcStr>,
    #[debug(skip)]
    type_resolver: Option<Arc<dyn ResolveType>>,
}

impl InterfaceTypeBuilder {
    pub(crate) fn new(manifest: &Manifest) -> Self {
        let name = manifest.name().clone();
        let fields = manifest
            .members()
            .iter()
            .map(|m| (m.name.clone(), FieldBuilder::new(&name, m)))
            .collect();
        Self {
            name,
            description: None,
            fields,
            interfaces: IndexSet::new(),
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

    /// Customizes the field `name`.
    ///
    /// Fails if the manifest has no such member.
    pub fn field(&mut self, name: &str) -> BuildResult<&mut FieldBuilder> {
        member_mut(&mut self.fields, &self.name, name)
    }

    /// Sets the interfaces this interface implements.
    ///
    /// Replaces previously set interfaces.
    pub fn implement<I, N>(&mut self, interfaces: I) -> &mut Self
    where
        I: IntoIterator<Item = N>,
        N: Into<ArcStr>,
    {
        self.interfaces = interfaces.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the default type resolver.
    pub fn type_resolver(&mut self, resolver: impl ResolveType + 'static) -> &mut Self {
        self.type_resolver = Some(Arc::new(resolver));
        self
    }

    pub(crate) fn build(self, ctx: &mut BuilderContext) -> BuildResult<MetaType> {
        let resolver = self
            .type_resolver
            .unwrap_or_else(|| Arc::new(InterfaceTypeResolver::new(self.name.clone())));
        ctx.register_type_resolver(self.name.clone(), resolver);

        let fields = self.fields.into_values().map(|f| f.build(ctx)).collect();
        let mut meta = InterfaceMeta::new(self.name, fields)
            .interfaces(self.interfaces.into_iter().collect());
        meta.description = self.description;
        Ok(meta.into_meta())
    }
}
