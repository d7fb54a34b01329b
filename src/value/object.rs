use arcstr::ArcStr;
use indexmap::map::{IndexMap, IntoIter};

use super::Value;

/// An object value
///
/// Besides its ordered fields, an object may carry a _model tag_: the name of
/// the host model it was produced from. Abstract type resolution relies on
/// this tag to find the concrete schema type of a value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    model: Option<ArcStr>,
    key_value_list: IndexMap<String, Value>,
}

impl Object {
    /// Create a new untagged object value with a fixed number of
    /// preallocated slots for field-value pairs
    pub fn with_capacity(size: usize) -> Self {
        Self {
            model: None,
            key_value_list: IndexMap::with_capacity(size),
        }
    }

    /// Creates an empty object tagged with the given host `model` name.
    pub fn of_model(model: impl Into<ArcStr>) -> Self {
        Self {
            model: Some(model.into()),
            key_value_list: IndexMap::new(),
        }
    }

    /// Tags this object with the given host `model` name.
    ///
    /// Overwrites any previously set tag.
    #[must_use]
    pub fn model(mut self, model: impl Into<ArcStr>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// The host model name this object was tagged with, if any.
    pub fn model_name(&self) -> Option<&ArcStr> {
        self.model.as_ref()
    }

    /// Add a new field with a value
    ///
    /// If there is already a field with the same name the old value
    /// is returned
    pub fn add_field<K>(&mut self, k: K, value: Value) -> Option<Value>
    where
        K: Into<String>,
    {
        self.key_value_list.insert(k.into(), value)
    }

    /// Builder-style [`Object::add_field`].
    #[must_use]
    pub fn field<K: Into<String>>(mut self, k: K, value: impl Into<Value>) -> Self {
        self.add_field(k, value.into());
        self
    }

    /// Check if the object already contains a field with the given name
    pub fn contains_field(&self, f: &str) -> bool {
        self.key_value_list.contains_key(f)
    }

    /// Get an iterator over all field value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.key_value_list.iter()
    }

    /// Get the current number of fields
    pub fn field_count(&self) -> usize {
        self.key_value_list.len()
    }

    /// Get the value for a given field
    pub fn get_field_value(&self, key: &str) -> Option<&Value> {
        self.key_value_list.get(key)
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.key_value_list.into_iter()
    }
}

impl<K> FromIterator<(K, Value)> for Object
where
    K: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
    {
        let iter = iter.into_iter();
        let mut ret = Self::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            ret.add_field(k, v);
        }
        ret
    }
}
