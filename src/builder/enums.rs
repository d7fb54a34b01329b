use arcstr::ArcStr;
use indexmap::IndexMap;

use crate::{
    builder::{BuildResult, member_mut},
    manifest::Manifest,
    schema::meta::{DeprecationStatus, EnumMeta, EnumValue, MetaType},
};

/// Declares an enumeration type from the constants of its model.
#[derive(Clone, Debug)]
pub struct EnumTypeBuilder {
    name: ArcStr,
    description: Option<ArcStr>,
    values: IndexMap<ArcStr, EnumValueBuilder>,
}

impl EnumTypeBuilder {
    pub(crate) fn new(manifest: &Manifest) -> Self {
        Self {
            name: manifest.name().clone(),
            description: None,
            values: manifest
                .constants()
                .iter()
                .map(|c| (c.clone(), EnumValueBuilder::new(c.clone())))
                .collect(),
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

    /// Customizes the value `name`.
    ///
    /// Fails if the manifest has no such constant.
    pub fn value(&mut self, name: &str) -> BuildResult<&mut EnumValueBuilder> {
        member_mut(&mut self.values, &self.name, name)
    }

    pub(crate) fn build(self) -> BuildResult<MetaType> {
        let values = self.values.into_values().map(EnumValueBuilder::build).collect();
        let mut meta = EnumMeta::new(self.name, values);
        meta.description = self.description;
        Ok(meta.into_meta())
    }
}

/// Customizes one value of an enumeration type.
#[derive(Clone, Debug)]
pub struct EnumValueBuilder {
    name: ArcStr,
    description: Option<ArcStr>,
    deprecation_status: DeprecationStatus,
}

impl EnumValueBuilder {
    fn new(name: ArcStr) -> Self {
        Self {
            name,
            description: None,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    /// Sets the description of the value.
    pub fn description(&mut self, description: impl Into<ArcStr>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the value as deprecated.
    pub fn deprecated(&mut self, reason: Option<&str>) -> &mut Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason.map(ArcStr::from));
        self
    }

    fn build(self) -> EnumValue {
        EnumValue {
            name: self.name,
            description: self.description,
            deprecation_status: self.deprecation_status,
        }
    }
}
