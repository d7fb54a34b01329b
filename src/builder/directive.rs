use arcstr::ArcStr;
use indexmap::{IndexMap, IndexSet};

use crate::{
    ast::InputValue,
    builder::{
        BuildError, BuildResult,
        context::BuilderContext,
        field::{ArgumentBuilder, arguments_of, build_arguments},
        member_mut,
    },
    manifest::Manifest,
    schema::model::{DirectiveApplication, DirectiveLocation, DirectiveType},
    util::to_directive_name,
};

/// Declares a directive from the manifest of its model.
///
/// The directive is named after the model with its first character
/// lower-cased, e.g. `CacheControl` declares `@cacheControl`. Members become
/// arguments.
#[derive(Clone, Debug)]
pub struct DirectiveTypeBuilder {
    name: ArcStr,
    description: Option<ArcStr>,
    locations: IndexSet<DirectiveLocation>,
    arguments: IndexMap<ArcStr, ArgumentBuilder>,
    is_repeatable: bool,
}

impl DirectiveTypeBuilder {
    pub(crate) fn new(manifest: &Manifest) -> Self {
        Self {
            name: to_directive_name(manifest.name()),
            description: None,
            locations: IndexSet::new(),
            arguments: arguments_of(manifest),
            is_repeatable: false,
        }
    }

    /// Name of the declared directive, without the leading `@`.
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// Sets the description of the directive.
    pub fn description(&mut self, description: impl Into<ArcStr>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the locations the directive may be applied at.
    ///
    /// Replaces previously set locations.
    pub fn on(&mut self, locations: impl IntoIterator<Item = DirectiveLocation>) -> &mut Self {
        self.locations = locations.into_iter().collect();
        self
    }

    /// Allows the directive at every location.
    pub fn on_any_location(&mut self) -> &mut Self {
        self.on(DirectiveLocation::ALL)
    }

    /// Allows the directive to be applied more than once at one location.
    pub fn repeatable(&mut self) -> &mut Self {
        self.is_repeatable = true;
        self
    }

    /// Customizes the argument `name`.
    ///
    /// Fails if the manifest has no such member.
    pub fn argument(&mut self, name: &str) -> BuildResult<&mut ArgumentBuilder> {
        let owner = format!("@{}", self.name);
        member_mut(&mut self.arguments, &owner, name)
    }

    pub(crate) fn build(self, ctx: &mut BuilderContext) -> BuildResult<DirectiveType> {
        if self.locations.is_empty() {
            return Err(BuildError::NoLocation {
                directive: self.name,
            });
        }

        let owner = format!("@{}", self.name);
        let arguments = build_arguments(self.arguments, &owner, ctx);
        let locations = self.locations.into_iter().collect::<Vec<_>>();

        let mut directive = DirectiveType::new(self.name, &locations, arguments);
        directive.description = self.description;
        directive.is_repeatable = self.is_repeatable;
        Ok(directive)
    }
}

/// Applies a declared directive to a schema element, binding argument values.
#[derive(Clone, Debug)]
pub struct DirectiveApplicationBuilder {
    name: ArcStr,
    members: IndexSet<ArcStr>,
    arguments: IndexMap<ArcStr, InputValue>,
}

impl DirectiveApplicationBuilder {
    pub(crate) fn new(manifest: &Manifest) -> Self {
        Self {
            name: to_directive_name(manifest.name()),
            members: manifest.members().iter().map(|m| m.name.clone()).collect(),
            arguments: IndexMap::new(),
        }
    }

    /// Binds `value` to the argument `name`.
    ///
    /// Fails if the directive manifest has no such member.
    pub fn argument(&mut self, name: &str, value: impl Into<InputValue>) -> BuildResult<&mut Self> {
        let Some(member) = self.members.get(name) else {
            return Err(BuildError::UnknownField {
                owner: format!("@{}", self.name),
                field: name.into(),
            });
        };
        self.arguments.insert(member.clone(), value.into());
        Ok(self)
    }

    pub(crate) fn build(self) -> DirectiveApplication {
        DirectiveApplication {
            name: self.name,
            arguments: self.arguments,
        }
    }
}
