//! # Core Models Module
//!
//! This module contains the data structures used to represent scaffold networks,
//! providing the foundation for all construction and export operations.
//!
//! ## Overview
//!
//! The models module defines the core abstractions for scaffold hierarchies: scaffold
//! records keyed by canonical SMILES, molecule records, network nodes with their
//! weighted parent/child adjacency, and the network container itself. These models are
//! designed to:
//!
//! - **Record decomposition relationships** - Multi-parent edges with per-edge weights
//! - **Guarantee identifier uniqueness** - One live node per canonical SMILES
//! - **Avoid ownership cycles** - Adjacency holds arena keys, never owning references
//! - **Stay deterministic** - Every observable ordering is reproducible
//!
//! ## Key Components
//!
//! - [`scaffold`] - Scaffold record with canonical SMILES, hierarchy level, and render hints
//! - [`molecule`] - Source molecule record attached to the scaffolds it produced
//! - [`properties`] - Opaque named values assigned by external property calculators
//! - [`node`] - A scaffold plus its parent/child adjacency and molecule membership
//! - [`network`] - The scaffold network container and its construction/query surface
//! - [`ids`] - Unique identifier types for nodes and molecules
//!
//! ## Usage
//!
//! The network is built incrementally by an external generation algorithm and finished
//! with a single virtual-root insertion.
//!
//! ```ignore
//! use scaffnet::core::models::{network::ScaffoldNetwork, scaffold::Scaffold};
//!
//! let mut network = ScaffoldNetwork::new();
//! let benzene = network.insert(Scaffold::new("c1ccccc1", 1));
//! let biphenyl = network.insert(Scaffold::new("c1ccc(-c2ccccc2)cc1", 2));
//! network.add_parent_edge(benzene, biphenyl, 2)?;
//! network.add_virtual_root()?;
//! ```

pub mod ids;
pub mod molecule;
pub mod network;
pub mod node;
pub mod properties;
pub mod scaffold;
