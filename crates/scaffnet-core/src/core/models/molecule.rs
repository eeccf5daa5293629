use super::properties::PropertyValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents one source molecule from the data set under analysis.
///
/// Molecules are opaque to the network: it records which molecules contributed
/// each scaffold but never inspects their structure. The SMILES here is the
/// molecule's own structure string, not a node key; several molecules may
/// share a structure, and a molecule is typically attached to every scaffold
/// the decomposition derived from it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Molecule {
    /// The SMILES string of the full molecule as supplied by the data source.
    pub smiles: String,
    /// The display title from the source data (e.g. a compound registry name).
    pub title: String,
    /// Opaque named values attached by external property calculators.
    properties: HashMap<String, PropertyValue>,
}

impl Molecule {
    /// Creates a new molecule record with no properties.
    pub fn new(smiles: &str, title: &str) -> Self {
        Self {
            smiles: smiles.to_string(),
            title: title.to_string(),
            properties: HashMap::new(),
        }
    }

    /// Attaches or replaces an opaque named property value.
    pub fn set_property(&mut self, name: &str, value: PropertyValue) {
        self.properties.insert(name.to_string(), value);
    }

    /// Retrieves a property value by name, if present.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Returns an iterator over all attached property name/value pairs.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(name, value)| (name.as_str(), value))
    }
}
