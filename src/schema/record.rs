//! Materialized row records.

use super::value::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One materialized row: an ordered property-to-value map.
///
/// Properties keep column declaration order. Serializes as a JSON object,
/// which is also the snapshot format carried by row-validation errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property` to `value`, keeping first-insertion order
    pub fn insert(&mut self, property: impl Into<String>, value: Value) {
        let property = property.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Look up a property by name
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no properties
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate properties in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (property, value) in &self.entries {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}
