use std::sync::Arc;

use arcstr::ArcStr;
use derive_more::with_trait::{Debug, Deref, DerefMut};
use indexmap::IndexMap;

use crate::{
    ast::{InputValue, Type},
    builder::{BuildResult, context::BuilderContext, member_mut},
    executor::{Arguments, Environment, Resolution, ResolverFn},
    manifest::{Manifest, Member},
    schema::meta::{Argument, DeprecationStatus, Field},
};

/// Customizes one field of an object or interface type.
#[derive(Clone, Debug)]
pub struct FieldBuilder {
    owner: ArcStr,
    name: ArcStr,
    field_type: Type,
    description: Option<ArcStr>,
    arguments: Option<FieldArgumentsBuilder>,
    deprecation_status: DeprecationStatus,
}

impl FieldBuilder {
    pub(crate) fn new(owner: &ArcStr, member: &Member) -> Self {
        Self {
            owner: owner.clone(),
            name: member.name.clone(),
            field_type: member.ty.to_type(),
            description: None,
            arguments: None,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    /// Name of the field.
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// Sets the description of the field.
    pub fn description(&mut self, description: impl Into<ArcStr>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Declares the arguments of the field from `manifest`, one argument per
    /// member.
    ///
    /// Replaces previously declared arguments.
    pub fn arguments(&mut self, manifest: &Manifest) -> &mut FieldArgumentsBuilder {
        let owner = format!("{}.{}", self.owner, self.name);
        self.arguments
            .insert(FieldArgumentsBuilder::new(owner, manifest))
    }

    /// Marks the field as deprecated.
    pub fn deprecated(&mut self, reason: Option<&str>) -> &mut Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason.map(ArcStr::from));
        self
    }

    pub(crate) fn build(self, ctx: &mut BuilderContext) -> Field {
        let referrer = format!("{}.{}", self.owner, self.name);
        let field_type = ctx.resolve_type_reference(self.field_type, referrer);
        Field {
            name: self.name,
            description: self.description,
            arguments: self.arguments.map(|a| a.build(ctx)),
            field_type,
            deprecation_status: self.deprecation_status,
        }
    }
}

/// Customizes one field of an object type, which may carry a resolver.
///
/// Derefs to the [`FieldBuilder`] shared with interface fields.
#[derive(Clone, Debug, Deref, DerefMut)]
pub struct ObjectFieldBuilder {
    #[deref]
    #[deref_mut]
    field: FieldBuilder,
    #[debug(skip)]
    resolver: Option<ResolverFn>,
}

impl ObjectFieldBuilder {
    pub(crate) fn new(owner: &ArcStr, member: &Member) -> Self {
        Self {
            field: FieldBuilder::new(owner, member),
            resolver: None,
        }
    }

    /// Attaches a resolver computing the value of the field.
    ///
    /// Without one, the field reads the same-named field of its parent
    /// value.
    pub fn resolver<F>(&mut self, resolver: F) -> &mut Self
    where
        F: Fn(&Environment<'_>, &Arguments) -> Resolution + Send + Sync + 'static,
    {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub(crate) fn build(self, ctx: &mut BuilderContext) -> Field {
        if let Some(resolver) = self.resolver {
            ctx.register_field_resolver(self.field.owner.clone(), self.field.name.clone(), resolver);
        }
        self.field.build(ctx)
    }
}

/// Customizes the arguments of one field.
#[derive(Clone, Debug)]
pub struct FieldArgumentsBuilder {
    owner: String,
    arguments: IndexMap<ArcStr, ArgumentBuilder>,
}

impl FieldArgumentsBuilder {
    fn new(owner: String, manifest: &Manifest) -> Self {
        Self {
            owner,
            arguments: arguments_of(manifest),
        }
    }

    /// Customizes the argument `name`.
    ///
    /// Fails if the arguments manifest has no such member.
    pub fn argument(&mut self, name: &str) -> BuildResult<&mut ArgumentBuilder> {
        member_mut(&mut self.arguments, &self.owner, name)
    }

    fn build(self, ctx: &mut BuilderContext) -> Vec<Argument> {
        build_arguments(self.arguments, &self.owner, ctx)
    }
}

/// Customizes one argument, directive argument or input field.
#[derive(Clone, Debug)]
pub struct ArgumentBuilder {
    name: ArcStr,
    arg_type: Type,
    description: Option<ArcStr>,
    default_value: Option<InputValue>,
}

/// Customizes one field of an input object type.
pub type InputFieldBuilder = ArgumentBuilder;

impl ArgumentBuilder {
    pub(crate) fn new(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            arg_type: member.ty.to_type(),
            description: None,
            default_value: None,
        }
    }

    /// Sets the description.
    pub fn description(&mut self, description: impl Into<ArcStr>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the value used when none is provided.
    ///
    /// The value is checked against the declared type when the schema is
    /// built.
    pub fn default_value(&mut self, value: impl Into<InputValue>) -> &mut Self {
        self.default_value = Some(value.into());
        self
    }

    pub(crate) fn build(self, referrer: String, ctx: &mut BuilderContext) -> Argument {
        Argument {
            arg_type: ctx.resolve_type_reference(self.arg_type, referrer),
            name: self.name,
            description: self.description,
            default_value: self.default_value,
        }
    }
}

pub(crate) fn arguments_of(manifest: &Manifest) -> IndexMap<ArcStr, ArgumentBuilder> {
    manifest
        .members()
        .iter()
        .map(|m| (m.name.clone(), ArgumentBuilder::new(m)))
        .collect()
}

pub(crate) fn build_arguments(
    arguments: IndexMap<ArcStr, ArgumentBuilder>,
    owner: &str,
    ctx: &mut BuilderContext,
) -> Vec<Argument> {
    arguments
        .into_values()
        .map(|a| {
            let referrer = format!("{owner}({})", a.name);
            a.build(referrer, ctx)
        })
        .collect()
}
