use super::ids::{MoleculeId, NodeId};
use super::molecule::Molecule;
use super::node::ScaffoldNode;
use super::scaffold::Scaffold;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Represents a contract violation during network construction.
///
/// Absent lookups are normal outcomes and never surface here; these errors
/// only report calls no correct generation algorithm makes.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NetworkError {
    #[error("Node not found in network: {0:?}")]
    NodeNotFound(NodeId),

    #[error("Molecule not found in network: {0:?}")]
    MoleculeNotFound(MoleculeId),

    #[error("The virtual root has already been inserted")]
    VirtualRootExists,
}

/// Aggregate counts describing a scaffold network.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    /// Number of distinct scaffold identifiers currently stored.
    pub scaffold_count: usize,
    /// Total number of parent edges across all stored nodes.
    pub edge_count: usize,
    /// Number of molecule records held by the network.
    pub molecule_count: usize,
    /// Highest hierarchy level among stored scaffolds (0 for an empty network).
    pub max_hierarchy_level: u32,
    /// Whether the virtual root finishing step has run.
    pub has_virtual_root: bool,
}

/// Represents a scaffold network: a directed acyclic multigraph of scaffolds
/// connected by weighted decomposition edges.
///
/// This struct is the central data structure of the library. Scaffolds and
/// molecules live in slot-map arenas; adjacency lists hold arena keys, so the
/// bidirectional parent/child structure never forms ownership cycles. A lookup
/// map from canonical SMILES to node key guarantees at most one live node per
/// identifier.
///
/// Construction is incremental and single-threaded: an external generation
/// algorithm interleaves [`insert`](Self::insert) and
/// [`add_parent_edge`](Self::add_parent_edge) calls, finishes with exactly one
/// [`add_virtual_root`](Self::add_virtual_root), and from then on the network
/// is read-only. Acyclicity is that algorithm's contract; this container
/// records whatever edges it is told about and never walks the graph to check.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldNetwork {
    /// Primary storage for nodes using a slot map for stable ID management.
    nodes: SlotMap<NodeId, ScaffoldNode>,
    /// Primary storage for molecule records.
    molecules: SlotMap<MoleculeId, Molecule>,
    /// Lookup map from canonical SMILES to the live node for that identifier.
    node_id_map: HashMap<String, NodeId>,
    /// The synthetic root node, present once the finishing step has run.
    virtual_root: Option<NodeId>,
}

impl ScaffoldNetwork {
    /// Creates a new, empty scaffold network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new node for `scaffold`, keyed by its canonical SMILES.
    ///
    /// If the identifier is already present the previous node is silently
    /// replaced (last write wins, the records are never merged). The displaced
    /// node stays addressable through any [`NodeId`] already handed out (edges
    /// drawn to it keep pointing at it), but identifier lookup, iteration,
    /// counting, and serialization only ever see the replacement. No edges are
    /// created by this call.
    ///
    /// # Arguments
    ///
    /// * `scaffold` - The scaffold record to store; its `smiles` field must not
    ///   be the reserved virtual-root identifier.
    ///
    /// # Return
    ///
    /// The ID of the newly created node.
    pub fn insert(&mut self, scaffold: Scaffold) -> NodeId {
        let smiles = scaffold.smiles.clone();
        let node_id = self.nodes.insert(ScaffoldNode::new(scaffold));
        self.node_id_map.insert(smiles, node_id);
        node_id
    }

    /// Finds the live node for a canonical SMILES string.
    ///
    /// # Arguments
    ///
    /// * `smiles` - The canonical identifier to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(NodeId)` if a scaffold with this identifier is stored,
    /// otherwise `None`. An absent identifier is a normal outcome, since
    /// generation algorithms probe before inserting.
    pub fn find_node_by_smiles(&self, smiles: &str) -> Option<NodeId> {
        self.node_id_map.get(smiles).copied()
    }

    /// Returns `true` if a scaffold with this canonical SMILES is stored.
    pub fn contains_smiles(&self, smiles: &str) -> bool {
        self.node_id_map.contains_key(smiles)
    }

    /// Retrieves an immutable reference to a node by its ID.
    ///
    /// Displaced nodes (see [`insert`](Self::insert)) remain reachable here by
    /// their old ID even though identifier lookup no longer returns them.
    ///
    /// # Return
    ///
    /// Returns `Some(&ScaffoldNode)` if the node exists, otherwise `None`.
    pub fn node(&self, id: NodeId) -> Option<&ScaffoldNode> {
        self.nodes.get(id)
    }

    /// Retrieves a mutable reference to a node by its ID.
    ///
    /// The adjacency lists are crate-private, so callers can update the
    /// wrapped scaffold (typically its property annotations) but cannot break
    /// the paired bookkeeping of the edge lists.
    ///
    /// # Return
    ///
    /// Returns `Some(&mut ScaffoldNode)` if the node exists, otherwise `None`.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut ScaffoldNode> {
        self.nodes.get_mut(id)
    }

    /// Returns the number of distinct scaffold identifiers currently stored,
    /// including the virtual root once it has been inserted.
    pub fn node_count(&self) -> usize {
        self.node_id_map.len()
    }

    /// Returns the total number of parent edges across all stored nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes_iter().map(|(_, node)| node.parents().len()).sum()
    }

    /// Returns the number of molecule records held by the network.
    pub fn molecule_count(&self) -> usize {
        self.molecules.len()
    }

    /// Returns an iterator over all stored nodes.
    ///
    /// Only live nodes are yielded, one per distinct identifier, in arbitrary
    /// order. Exporters that need a reproducible order sort by canonical
    /// SMILES themselves.
    pub fn nodes_iter(&self) -> impl Iterator<Item = (NodeId, &ScaffoldNode)> {
        self.node_id_map
            .values()
            .filter_map(|&id| self.nodes.get(id).map(|node| (id, node)))
    }

    /// Returns an iterator over stored nodes whose scaffold sits at the given
    /// hierarchy level.
    pub fn nodes_at_level(&self, level: u32) -> impl Iterator<Item = (NodeId, &ScaffoldNode)> {
        self.nodes_iter()
            .filter(move |(_, node)| node.scaffold.hierarchy_level == level)
    }

    /// Returns the IDs of all stored nodes that currently have no parents,
    /// in ascending canonical SMILES order.
    ///
    /// Before the finishing step these are the top-level scaffolds; afterwards
    /// only the virtual root itself remains parentless.
    pub fn orphan_nodes(&self) -> Vec<NodeId> {
        let mut orphans: Vec<NodeId> = self
            .nodes_iter()
            .filter(|(_, node)| node.is_orphan())
            .map(|(id, _)| id)
            .collect();
        orphans.sort_unstable_by(|a, b| {
            self.nodes[*a]
                .scaffold
                .smiles
                .cmp(&self.nodes[*b].scaffold.smiles)
        });
        orphans
    }

    /// Records a parent→child decomposition edge with the given weight.
    ///
    /// The child's parent list, the child's weight list, and the parent's
    /// child list are updated together, so no half-edge can ever be observed.
    /// Repeated edges between the same pair are allowed (the network is a
    /// multigraph), and no attempt is made to detect cycles; acyclicity is
    /// the calling algorithm's contract.
    ///
    /// # Arguments
    ///
    /// * `parent_id` - The decomposition parent.
    /// * `child_id` - The scaffold the parent was derived from.
    /// * `weight` - The decomposition weight annotating this edge.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NodeNotFound`] if either ID is not owned by
    /// this network.
    pub fn add_parent_edge(
        &mut self,
        parent_id: NodeId,
        child_id: NodeId,
        weight: u32,
    ) -> Result<(), NetworkError> {
        if !self.nodes.contains_key(parent_id) {
            return Err(NetworkError::NodeNotFound(parent_id));
        }
        if !self.nodes.contains_key(child_id) {
            return Err(NetworkError::NodeNotFound(child_id));
        }

        self.nodes[child_id].add_parent(parent_id, weight);
        self.nodes[parent_id].add_child(child_id);
        Ok(())
    }

    /// Inserts the synthetic virtual root, finishing network construction.
    ///
    /// Every stored node that is parentless at this moment becomes a child of
    /// the root with weight `0` (in ascending canonical SMILES order); nodes
    /// that already have at least one parent are untouched. The root itself is
    /// stored under the reserved identifier like any other scaffold.
    ///
    /// Call exactly once, after all scaffolds are inserted and all organic
    /// edges are drawn.
    ///
    /// # Return
    ///
    /// The ID of the newly created root node.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::VirtualRootExists`] on a second call; the
    /// network is left unchanged.
    pub fn add_virtual_root(&mut self) -> Result<NodeId, NetworkError> {
        if self.virtual_root.is_some() {
            return Err(NetworkError::VirtualRootExists);
        }

        // Collect before inserting so the root does not count as its own orphan.
        let orphans = self.orphan_nodes();
        let root_id = self.insert(Scaffold::virtual_root());

        for orphan_id in &orphans {
            self.nodes[*orphan_id].add_parent(root_id, 0);
            self.nodes[root_id].add_child(*orphan_id);
        }

        self.virtual_root = Some(root_id);
        debug!(
            top_level_scaffolds = orphans.len(),
            "Virtual root inserted; network construction finished."
        );
        Ok(root_id)
    }

    /// Returns the virtual root's ID once the finishing step has run.
    pub fn virtual_root(&self) -> Option<NodeId> {
        self.virtual_root
    }

    /// Stores a molecule record and returns its ID.
    ///
    /// Molecules are not keyed by structure; every call stores a new record.
    pub fn add_molecule(&mut self, molecule: Molecule) -> MoleculeId {
        self.molecules.insert(molecule)
    }

    /// Retrieves an immutable reference to a molecule by its ID.
    pub fn molecule(&self, id: MoleculeId) -> Option<&Molecule> {
        self.molecules.get(id)
    }

    /// Retrieves a mutable reference to a molecule by its ID.
    pub fn molecule_mut(&mut self, id: MoleculeId) -> Option<&mut Molecule> {
        self.molecules.get_mut(id)
    }

    /// Returns an iterator over all molecule records in arbitrary order.
    pub fn molecules_iter(&self) -> impl Iterator<Item = (MoleculeId, &Molecule)> {
        self.molecules.iter()
    }

    /// Records that `molecule_id` maps to the scaffold of `node_id`.
    ///
    /// Attaching the same molecule to the same node again is an idempotent
    /// no-op: a molecule contributes to a scaffold once.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NodeNotFound`] or
    /// [`NetworkError::MoleculeNotFound`] if either ID is not owned by this
    /// network.
    pub fn attach_molecule(
        &mut self,
        node_id: NodeId,
        molecule_id: MoleculeId,
    ) -> Result<(), NetworkError> {
        if !self.molecules.contains_key(molecule_id) {
            return Err(NetworkError::MoleculeNotFound(molecule_id));
        }
        let node = self
            .nodes
            .get_mut(node_id)
            .ok_or(NetworkError::NodeNotFound(node_id))?;
        node.add_molecule(molecule_id);
        Ok(())
    }

    /// Computes aggregate counts for the current network state.
    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            scaffold_count: self.node_count(),
            edge_count: self.edge_count(),
            molecule_count: self.molecule_count(),
            max_hierarchy_level: self
                .nodes_iter()
                .map(|(_, node)| node.scaffold.hierarchy_level)
                .max()
                .unwrap_or(0),
            has_virtual_root: self.virtual_root.is_some(),
        }
    }
}
