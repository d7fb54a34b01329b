use arcstr::ArcStr;
use indexmap::{IndexMap, IndexSet};

use crate::{
    builder::{
        BuildResult,
        context::BuilderContext,
        directive::DirectiveApplicationBuilder,
        field::ObjectFieldBuilder,
        member_mut,
    },
    manifest::Manifest,
    schema::meta::{MetaType, ObjectMeta},
};

/// Declares an object type from the manifest of its model.
///
/// Every member of the manifest becomes a field. Fields are customized by
/// name through [`field`](Self::field).
#[derive(Clone, Debug)]
pub struct ObjectTypeBuilder {
    name: ArcStr,
    description: Option<ArcStr>,
    fields: IndexMap<ArcStr, ObjectFieldBuilder>,
    interfaces: IndexSet<ArcStr>,
    directives: Vec<DirectiveApplicationBuilder>,
}

impl ObjectTypeBuilder {
    pub(crate) fn new(manifest: &Manifest) -> Self {
        let name = manifest.name().clone();
        let fields = manifest
            .members()
            .iter()
            .map(|m| (m.name.clone(), ObjectFieldBuilder::new(&name, m)))
            .collect();
        Self {
            name,
            description: None,
            fields,
            interfaces: IndexSet::new(),
            directives: Vec::new(),
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
    pub fn field(&mut self, name: &str) -> BuildResult<&mut ObjectFieldBuilder> {
        member_mut(&mut self.fields, &self.name, name)
    }

    /// Sets the interfaces the type implements.
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

    /// Applies the directive described by `directive` to the type.
    ///
    /// Applications accumulate. Bound values are given through the returned
    /// builder.
    pub fn directive(&mut self, directive: &Manifest) -> &mut DirectiveApplicationBuilder {
        self.directives.push(DirectiveApplicationBuilder::new(directive));
        let last = self.directives.len() - 1;
        &mut self.directives[last]
    }

    pub(crate) fn build(self, ctx: &mut BuilderContext) -> BuildResult<MetaType> {
        let fields = self.fields.into_values().map(|f| f.build(ctx)).collect();
        let interfaces = self.interfaces.into_iter().collect();
        let directives = self.directives.into_iter().map(DirectiveApplicationBuilder::build).collect();

        let mut meta = ObjectMeta::new(self.name, fields)
            .interfaces(interfaces)
            .directives(directives);
        meta.description = self.description;
        Ok(meta.into_meta())
    }
}
