use arcstr::ArcStr;
use indexmap::IndexMap;

use crate::{
    builder::{
        BuildResult,
        context::BuilderContext,
        field::{InputFieldBuilder, arguments_of},
        member_mut,
    },
    manifest::Manifest,
    schema::meta::{InputObjectMeta, MetaType},
};

/// Declares an input object type from the manifest of its model.
#[derive(Clone, Debug)]
pub struct InputObjectTypeBuilder {
    name: ArcStr,
    description: Option<ArcStr>,
    fields: IndexMap<ArcStr, InputFieldBuilder>,
}

impl InputObjectTypeBuilder {
    pub(crate) fn new(manifest: &Manifest) -> Self {
        Self {
            name: manifest.name().clone(),
            description: None,
            fields: arguments_of(manifest),
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

    /// Customizes the input field `name`.
    ///
    /// Fails if the manifest has no such member.
    pub fn field(&mut self, name: &str) -> BuildResult<&mut InputFieldBuilder> {
        member_mut(&mut self.fields, &self.name, name)
    }

    pub(crate) fn build(self, ctx: &mut BuilderContext) -> BuildResult<MetaType> {
        let fields = self
            .fields
            .into_iter()
            .map(|(name, f)| f.build(format!("{}.{name}", self.name), ctx))
            .collect();
        let mut meta = InputObjectMeta::new(self.name, fields);
        meta.description = self.description;
        Ok(meta.into_meta())
    }
}
