//! Runtime resolution of abstract types.
//!
//! Values returned from union or interface typed fields must be mapped onto
//! one of the schema's object types. The mapping relies on the model tag the
//! value carries (see [`Object::model_name`](crate::value::Object::model_name)).

use arcstr::ArcStr;
use fnv::FnvHashSet;

use crate::{
    schema::{meta::ObjectMeta, model::SchemaType},
    value::Value,
};

/// Maps a runtime value onto a concrete object type of the schema.
pub trait ResolveType: Send + Sync {
    /// Returns the object type `value` belongs to, or [`None`] if the value
    /// cannot be placed.
    fn resolve_type<'s>(&self, value: &Value, schema: &'s SchemaType) -> Option<&'s ObjectMeta>;
}

/// Default type resolver of union types.
///
/// A value resolves only if its model is exactly one of the members. The
/// object type named after the model is returned.
#[derive(Clone, Debug)]
pub struct UnionTypeResolver {
    members: FnvHashSet<ArcStr>,
}

impl UnionTypeResolver {
    /// Resolves values tagged with one of `members`.
    pub fn new(members: impl IntoIterator<Item = ArcStr>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }
}

impl ResolveType for UnionTypeResolver {
    fn resolve_type<'s>(&self, value: &Value, schema: &'s SchemaType) -> Option<&'s ObjectMeta> {
        let model = value.model_name()?;
        if !self.members.contains(model) {
            return None;
        }
        schema.object_by_name(model)
    }
}

/// Default type resolver of interface types.
///
/// A value resolves if its model is the interface model or transitively
/// extends it, and an object type named after the value's model exists.
#[derive(Clone, Debug)]
pub struct InterfaceTypeResolver {
    interface_model: ArcStr,
}

impl InterfaceTypeResolver {
    /// Resolves values whose model is a subtype of `interface_model`.
    pub fn new(interface_model: ArcStr) -> Self {
        Self { interface_model }
    }
}

impl ResolveType for InterfaceTypeResolver {
    fn resolve_type<'s>(&self, value: &Value, schema: &'s SchemaType) -> Option<&'s ObjectMeta> {
        let model = value.model_name()?;
        if !schema.models().is_subtype(model, &self.interface_model) {
            return None;
        }
        schema.object_by_name(model)
    }
}
