//! # Core Module
//!
//! This module provides the data structures and export machinery for scaffold network
//! analysis, serving as the computational core of the library.
//!
//! ## Overview
//!
//! The core module implements the in-memory scaffold network: a directed acyclic
//! multigraph of chemical scaffolds connected by weighted decomposition edges, together
//! with the molecules that contributed each scaffold and the deterministic exporters
//! used by downstream tooling.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Network Representation** ([`models`]) - Scaffolds, molecules, nodes, and the
//!   network container with its construction and query surface
//! - **Export** ([`io`]) - Graph-exchange (GML) and property-table (CSV) writers with
//!   canonical ordering
//!
//! ## Key Capabilities
//!
//! - **Incremental construction** driven by an external scaffold generation algorithm
//! - **Multi-parent membership** with positionally aligned per-edge decomposition weights
//! - **Virtual root insertion** anchoring every top-level scaffold under one synthetic node
//! - **Bit-reproducible serialization** for comparison-based testing and downstream
//!   visualization pipelines

pub mod io;
pub mod models;
