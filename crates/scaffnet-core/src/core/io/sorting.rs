//! Utilities for sorting network components into canonical order.
//!
//! Exporters assign serialization-local ids and emit rows by walking the
//! network in ascending canonical SMILES order, so repeated exports of the
//! same network produce byte-identical documents regardless of hash-map
//! iteration order.

use crate::core::models::ids::NodeId;
use crate::core::models::network::ScaffoldNetwork;
use crate::core::models::node::ScaffoldNode;

#[derive(Debug)]
pub struct CanonicalNode<'a> {
    pub id: NodeId,
    pub source: &'a ScaffoldNode,
}

pub fn sort_network_nodes(network: &ScaffoldNetwork) -> Vec<CanonicalNode> {
    let mut nodes_to_sort: Vec<CanonicalNode> = network
        .nodes_iter()
        .map(|(node_id, node)| CanonicalNode {
            id: node_id,
            source: node,
        })
        .collect();

    nodes_to_sort.sort_unstable_by(|a, b| a.source.scaffold.smiles.cmp(&b.source.scaffold.smiles));

    nodes_to_sort
}
