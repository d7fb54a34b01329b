//! Host-side descriptions of declared types.
//!
//! A [`Manifest`] is the ordered member list of one host model, produced
//! outside of this crate (by hand, or derived from a host type's structure).
//! Builders are constructed from manifests and never inspect host types
//! themselves.

use std::collections::VecDeque;

use arcstr::ArcStr;
use fnv::{FnvHashMap, FnvHashSet};

use crate::ast::Type;

/// Host-side type of a manifest member.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HostType {
    /// A member of a named host type, e.g. `Int` or `Point`.
    Named {
        /// Name of the referenced type.
        name: ArcStr,
        /// Whether the member admits absent values.
        nullable: bool,
    },
    /// A list-like member.
    List {
        /// Type of the list elements.
        of: Box<HostType>,
        /// Whether the member admits absent values.
        nullable: bool,
    },
}

impl HostType {
    /// A non-nullable member of the named type.
    pub fn named(name: impl Into<ArcStr>) -> Self {
        Self::Named {
            name: name.into(),
            nullable: false,
        }
    }

    /// A non-nullable list-like member with the given element type.
    pub fn list(of: Self) -> Self {
        Self::List {
            of: Box::new(of),
            nullable: false,
        }
    }

    /// Marks this member as nullable.
    #[must_use]
    pub fn nullable(self) -> Self {
        match self {
            Self::Named { name, .. } => Self::Named {
                name,
                nullable: true,
            },
            Self::List { of, .. } => Self::List { of, nullable: true },
        }
    }

    /// Derives the schema [`Type`] of this member.
    ///
    /// List-like members become lists (recursively), nullable members stay
    /// bare and everything else gets wrapped into a non-null type.
    pub fn to_type(&self) -> Type {
        match self {
            Self::Named { name, nullable } => {
                let t = Type::Named(name.clone());
                if *nullable { t } else { t.non_null() }
            }
            Self::List { of, nullable } => {
                let t = Type::List(Box::new(of.to_type()));
                if *nullable { t } else { t.non_null() }
            }
        }
    }
}

/// One member of a [`Manifest`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Member {
    /// Name of the member, used verbatim as the field or argument name.
    pub name: ArcStr,
    /// Host type of the member.
    pub ty: HostType,
}

/// Ordered description of a host model.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Manifest {
    pub(crate) name: ArcStr,
    pub(crate) members: Vec<Member>,
    pub(crate) constants: Vec<ArcStr>,
    pub(crate) supertypes: Vec<ArcStr>,
}

impl Manifest {
    /// Starts an empty manifest for the host model `name`.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends a member.
    #[must_use]
    pub fn member(mut self, name: impl Into<ArcStr>, ty: HostType) -> Self {
        self.members.push(Member {
            name: name.into(),
            ty,
        });
        self
    }

    /// Appends an enumeration constant.
    #[must_use]
    pub fn constant(mut self, name: impl Into<ArcStr>) -> Self {
        self.constants.push(name.into());
        self
    }

    /// Records a direct supertype of the host model.
    #[must_use]
    pub fn extends(mut self, supertype: impl Into<ArcStr>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    /// Name of the host model.
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Enumeration constants in declaration order.
    pub fn constants(&self) -> &[ArcStr] {
        &self.constants
    }

    /// Direct supertypes of the host model.
    pub fn supertypes(&self) -> &[ArcStr] {
        &self.supertypes
    }
}

/// Subtyping relation between host models.
///
/// Populated from the manifests of every declared type and frozen along with
/// the schema.
#[derive(Clone, Debug, Default)]
pub struct ModelHierarchy {
    parents: FnvHashMap<ArcStr, Vec<ArcStr>>,
}

impl ModelHierarchy {
    /// Records the direct supertypes of `manifest`'s model.
    pub(crate) fn record(&mut self, manifest: &Manifest) {
        let parents = self.parents.entry(manifest.name.clone()).or_default();
        for s in &manifest.supertypes {
            if !parents.contains(s) {
                parents.push(s.clone());
            }
        }
    }

    /// Direct supertypes of `model`.
    pub fn parents_of(&self, model: &str) -> &[ArcStr] {
        self.parents.get(model).map_or(&[], Vec::as_slice)
    }

    /// Checks whether `sub` is `sup` or transitively extends it.
    pub fn is_subtype(&self, sub: &str, sup: &str) -> bool {
        if sub == sup {
            return true;
        }

        let mut seen = FnvHashSet::default();
        let mut queue: VecDeque<&str> = VecDeque::from([sub]);
        while let Some(model) = queue.pop_front() {
            if !seen.insert(model) {
                continue;
            }
            for parent in self.parents_of(model) {
                if parent == sup {
                    return true;
                }
                queue.push_back(parent);
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{HostType, Manifest, ModelHierarchy};

    #[test]
    fn derives_types_from_members() {
        let list = HostType::list(HostType::named("Int").nullable());
        assert_eq!(list.to_type().to_string(), "[Int]!");

        let nested = HostType::list(HostType::list(HostType::named("String"))).nullable();
        assert_eq!(nested.to_type().to_string(), "[[String!]!]");

        assert_eq!(HostType::named("Point").to_type().to_string(), "Point!");
    }

    #[test]
    fn subtyping_is_transitive() {
        let mut models = ModelHierarchy::default();
        models.record(&Manifest::new("Droid").extends("Machine"));
        models.record(&Manifest::new("Machine").extends("Character"));
        models.record(&Manifest::new("Human").extends("Character"));

        assert!(models.is_subtype("Droid", "Character"));
        assert!(models.is_subtype("Droid", "Droid"));
        assert!(!models.is_subtype("Character", "Droid"));
        assert!(!models.is_subtype("Human", "Machine"));
    }

    #[test]
    fn subtyping_survives_cycles() {
        let mut models = ModelHierarchy::default();
        models.record(&Manifest::new("A").extends("B"));
        models.record(&Manifest::new("B").extends("A"));

        assert!(models.is_subtype("A", "B"));
        assert!(!models.is_subtype("A", "C"));
    }
}
