//! Shared state of one schema build.

use std::sync::Arc;

use arcstr::ArcStr;
use indexmap::IndexMap;

use crate::{
    ast::Type,
    builder::{BuildError, BuildResult, RootOperations},
    executor::ResolverFn,
    manifest::ModelHierarchy,
    schema::{
        code_registry::{CodeRegistry, ScalarCoercion},
        meta::MetaType,
        model::{DirectiveType, OperationType, SchemaType},
        resolve_type::ResolveType,
    },
    types::scalars,
    validation,
};

/// A type name recorded before the type it names is known to exist.
#[derive(Clone, Debug)]
pub(crate) struct TypeReference {
    pub(crate) name: ArcStr,
    pub(crate) referrer: String,
}

/// Registry of everything produced while building one schema.
///
/// Type builders register their finished metadata, executable code and the
/// type names they reference here. Nothing is checked for completeness until
/// [`freeze`](Self::freeze).
#[derive(Debug, Default)]
pub struct BuilderContext {
    types: IndexMap<ArcStr, MetaType>,
    directives: IndexMap<ArcStr, DirectiveType>,
    references: Vec<TypeReference>,
    code_registry: CodeRegistry,
    models: ModelHierarchy,
}

impl BuilderContext {
    pub(crate) fn new(models: ModelHierarchy) -> Self {
        Self {
            models,
            ..Self::default()
        }
    }

    /// Registers a named type.
    ///
    /// Fails if a type with the same name is already registered.
    pub fn register_type(&mut self, meta: MetaType) -> BuildResult<()> {
        let name = meta.name().clone();
        if self.types.contains_key(&name) {
            return Err(BuildError::DuplicateDefinition { name });
        }
        tracing::trace!(name = %name, kind = %meta.type_kind(), "registered type");
        self.types.insert(name, meta);
        Ok(())
    }

    /// Registers a directive definition.
    ///
    /// Fails if a directive with the same name is already registered.
    pub fn register_directive(&mut self, directive: DirectiveType) -> BuildResult<()> {
        let name = directive.name.clone();
        if self.directives.contains_key(&name) {
            return Err(BuildError::DuplicateDefinition { name });
        }
        tracing::trace!(name = %name, "registered directive");
        self.directives.insert(name, directive);
        Ok(())
    }

    /// Records a reference from `referrer` to the type `ty` names.
    ///
    /// The reference stays a placeholder until the schema is frozen, at which
    /// point it must resolve to a registered type.
    pub fn resolve_type_reference(&mut self, ty: Type, referrer: impl Into<String>) -> Type {
        self.references.push(TypeReference {
            name: ty.innermost_name().clone(),
            referrer: referrer.into(),
        });
        ty
    }

    /// Attaches a resolver to the field `owner.field`.
    pub fn register_field_resolver(&mut self, owner: ArcStr, field: ArcStr, resolver: ResolverFn) {
        self.code_registry
            .register_field_resolver(owner, field, resolver);
    }

    /// Attaches a type resolver to the abstract type `name`.
    pub fn register_type_resolver(&mut self, name: ArcStr, resolver: Arc<dyn ResolveType>) {
        self.code_registry.register_type_resolver(name, resolver);
    }

    /// Attaches a coercion to the scalar `name`.
    pub fn register_scalar_coercion(&mut self, name: ArcStr, coercion: ScalarCoercion) {
        self.code_registry.register_scalar_coercion(name, coercion);
    }

    /// Injects built-ins, resolves the root operations and validates
    /// everything registered so far.
    pub(crate) fn freeze(mut self, roots: RootOperations) -> BuildResult<SchemaType> {
        for directive in DirectiveType::builtins() {
            self.register_directive(directive)?;
        }
        for (name, _) in scalars::BUILTIN_SCALARS {
            if let (Some(meta), Some(coercion)) =
                (scalars::builtin_meta(name), scalars::builtin_coercion(name))
            {
                self.register_scalar_coercion(meta.name.clone(), coercion);
                self.register_type(meta.into_meta())?;
            }
        }

        let Some(query) = roots.query else {
            return Err(BuildError::MissingQueryType);
        };
        self.check_root(OperationType::Query, &query)?;
        if let Some(mutation) = &roots.mutation {
            self.check_root(OperationType::Mutation, mutation)?;
        }
        if let Some(subscription) = &roots.subscription {
            self.check_root(OperationType::Subscription, subscription)?;
        }

        let schema = SchemaType {
            types: self.types,
            query_type_name: query,
            mutation_type_name: roots.mutation,
            subscription_type_name: roots.subscription,
            directives: self.directives,
            code_registry: self.code_registry,
            models: self.models,
        };
        validation::validate_schema(&schema, &self.references)?;

        tracing::debug!(
            types = schema.type_count(),
            directives = schema.directives.len(),
            resolvers = schema.code_registry.field_resolver_count(),
            kinds = ?schema.kind_counts(),
            "froze schema",
        );
        Ok(schema)
    }

    fn check_root(&self, operation: OperationType, name: &ArcStr) -> BuildResult<()> {
        match self.types.get(name) {
            None => Err(BuildError::UndeclaredRootType {
                operation,
                name: name.clone(),
            }),
            Some(MetaType::Object(_)) => Ok(()),
            Some(_) => Err(BuildError::NotAnObjectType {
                name: name.clone(),
                role: format!("the {operation} root"),
            }),
        }
    }
}
