use super::properties::PropertyValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved identifier of the synthetic virtual root scaffold.
///
/// `ROOT` is not a valid SMILES string, so it can never collide with the
/// canonical identifier of a real scaffold produced by a generation algorithm.
pub const VIRTUAL_ROOT_SMILES: &str = "ROOT";

/// Represents one chemical scaffold discovered during network generation.
///
/// A scaffold is an immutable value from the network's point of view: it is
/// produced by an external decomposition algorithm, inserted once, and from
/// then on only its property annotations are expected to change. The canonical
/// SMILES string doubles as the network-wide node key and must not be altered
/// after insertion.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Scaffold {
    /// The canonical SMILES string identifying this scaffold's structure.
    pub smiles: String,
    /// The decomposition depth assigned by the generation algorithm.
    pub hierarchy_level: u32,
    /// Rendering width hint in display units, carried through to serialization only.
    pub render_width: f64,
    /// Rendering height hint in display units, carried through to serialization only.
    pub render_height: f64,
    /// Opaque named values attached by external property calculators.
    properties: HashMap<String, PropertyValue>,
}

impl Scaffold {
    /// Creates a new scaffold with zeroed render hints and no properties.
    ///
    /// # Arguments
    ///
    /// * `smiles` - The canonical SMILES string; must be non-empty and unique
    ///   per distinct structure.
    /// * `hierarchy_level` - The decomposition depth supplied by the generation
    ///   algorithm.
    pub fn new(smiles: &str, hierarchy_level: u32) -> Self {
        Self {
            smiles: smiles.to_string(),
            hierarchy_level,
            render_width: 0.0,
            render_height: 0.0,
            properties: HashMap::new(),
        }
    }

    /// Creates the synthetic virtual root scaffold.
    ///
    /// The root carries the reserved identifier and zero-valued metadata; it
    /// has no chemical meaning and exists only to anchor every top-level
    /// scaffold under a common ancestor.
    pub fn virtual_root() -> Self {
        Self::new(VIRTUAL_ROOT_SMILES, 0)
    }

    /// Returns `true` if this scaffold is the synthetic virtual root.
    pub fn is_virtual_root(&self) -> bool {
        self.smiles == VIRTUAL_ROOT_SMILES
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
    ///
    /// Iteration order is arbitrary; exporters that need a reproducible order
    /// sort the names themselves.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scaffold_has_expected_default_fields() {
        let scaffold = Scaffold::new("c1ccccc1", 1);

        assert_eq!(scaffold.smiles, "c1ccccc1");
        assert_eq!(scaffold.hierarchy_level, 1);
        assert_eq!(scaffold.render_width, 0.0);
        assert_eq!(scaffold.render_height, 0.0);
        assert_eq!(scaffold.properties().count(), 0);
        assert!(!scaffold.is_virtual_root());
    }

    #[test]
    fn virtual_root_uses_reserved_identifier_and_zeroed_metadata() {
        let root = Scaffold::virtual_root();

        assert_eq!(root.smiles, VIRTUAL_ROOT_SMILES);
        assert_eq!(root.hierarchy_level, 0);
        assert_eq!(root.render_width, 0.0);
        assert_eq!(root.render_height, 0.0);
        assert!(root.is_virtual_root());
    }

    #[test]
    fn set_property_stores_and_replaces_values() {
        let mut scaffold = Scaffold::new("C1CCNCC1", 2);

        scaffold.set_property("ring_count", PropertyValue::Integer(1));
        assert_eq!(
            scaffold.property("ring_count"),
            Some(&PropertyValue::Integer(1))
        );

        scaffold.set_property("ring_count", PropertyValue::Integer(3));
        assert_eq!(
            scaffold.property("ring_count"),
            Some(&PropertyValue::Integer(3))
        );
        assert!(scaffold.property("logp").is_none());
    }

    #[test]
    fn scaffold_round_trips_through_serde() {
        let mut scaffold = Scaffold::new("c1ccncc1", 1);
        scaffold.render_width = 40.0;
        scaffold.render_height = 40.0;
        scaffold.set_property("aromatic", PropertyValue::Text("yes".to_string()));

        let encoded = toml::to_string(&scaffold).unwrap();
        let decoded: Scaffold = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, scaffold);
    }
}
