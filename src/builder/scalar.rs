use std::sync::Arc;

use arcstr::ArcStr;
use derive_more::with_trait::Debug;

use crate::{
    builder::{BuildError, BuildResult, context::BuilderContext},
    schema::{
        code_registry::{BoxError, CoerceFn, ScalarCoercion},
        meta::{MetaType, ScalarMeta},
    },
    value::Value,
};

/// Declares a custom scalar type.
///
/// Both a serializer and a deserializer are required. The deserializer
/// parses wire values as well as schema-language literals.
#[derive(Clone, Debug)]
pub struct ScalarTypeBuilder {
    name: ArcStr,
    description: Option<ArcStr>,
    #[debug(skip)]
    serialize: Option<CoerceFn>,
    #[debug(skip)]
    deserialize: Option<CoerceFn>,
}

impl ScalarTypeBuilder {
    pub(crate) fn new(name: ArcStr) -> Self {
        Self {
            name,
            description: None,
            serialize: None,
            deserialize: None,
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

    /// Sets the function turning host values into wire values.
    ///
    /// Returning a [`CoercionError`](crate::CoercionError) reports its
    /// message as-is, any other error gets wrapped.
    pub fn serializer<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Value) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.serialize = Some(Arc::new(f));
        self
    }

    /// Sets the function turning wire values and literals into host values.
    pub fn deserializer<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Value) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.deserialize = Some(Arc::new(f));
        self
    }

    pub(crate) fn build(self, ctx: &mut BuilderContext) -> BuildResult<MetaType> {
        let Some(serialize) = self.serialize else {
            return Err(BuildError::MissingCoercion {
                scalar: self.name,
                missing: "serialize",
            });
        };
        let Some(deserialize) = self.deserialize else {
            return Err(BuildError::MissingCoercion {
                scalar: self.name,
                missing: "deserialize",
            });
        };

        ctx.register_scalar_coercion(
            self.name.clone(),
            ScalarCoercion::from_fns(self.name.clone(), serialize, deserialize),
        );

        let mut meta = ScalarMeta::new(self.name);
        meta.description = self.description;
        Ok(meta.into_meta())
    }
}
