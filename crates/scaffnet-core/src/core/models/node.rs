use super::ids::{MoleculeId, NodeId};
use super::scaffold::Scaffold;

/// One node of the scaffold network: a scaffold plus its adjacency.
///
/// Parent and child lists hold arena keys into the owning network, never
/// references, so the bidirectional structure carries no ownership cycles.
/// `parent_weights` is positionally aligned with `parents`: the weight at
/// index `i` belongs to the edge from `parents[i]` down to this node. Both
/// sides of an edge are always recorded together; the adjacency lists are
/// writable only from within the crate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldNode {
    pub scaffold: Scaffold,                  // The scaffold record this node wraps
    pub(crate) parents: Vec<NodeId>,         // Ordered parent scaffolds (multi-parent DAG)
    pub(crate) parent_weights: Vec<u32>,     // Decomposition weight per parent, same order
    pub(crate) children: Vec<NodeId>,        // Ordered child scaffolds
    pub(crate) molecules: Vec<MoleculeId>,   // Source molecules mapped to this scaffold
}

impl ScaffoldNode {
    pub(crate) fn new(scaffold: Scaffold) -> Self {
        Self {
            scaffold,
            parents: Vec::new(),
            parent_weights: Vec::new(),
            children: Vec::new(),
            molecules: Vec::new(),
        }
    }

    /// Records `parent` as an additional parent of this node with the given
    /// decomposition weight. The caller must also record the matching child
    /// entry on the parent node.
    pub(crate) fn add_parent(&mut self, parent: NodeId, weight: u32) {
        self.parents.push(parent);
        self.parent_weights.push(weight);
    }

    pub(crate) fn add_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn add_molecule(&mut self, molecule: MoleculeId) {
        if !self.molecules.contains(&molecule) {
            self.molecules.push(molecule);
        }
    }

    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    pub fn parent_weights(&self) -> &[u32] {
        &self.parent_weights
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn molecules(&self) -> &[MoleculeId] {
        &self.molecules
    }

    /// Returns the parent edges as `(parent, weight)` pairs in parent order.
    pub fn parent_edges(&self) -> impl Iterator<Item = (NodeId, u32)> + '_ {
        self.parents
            .iter()
            .copied()
            .zip(self.parent_weights.iter().copied())
    }

    /// Returns `true` if this node currently has no parents.
    pub fn is_orphan(&self) -> bool {
        self.parents.is_empty()
    }
}
