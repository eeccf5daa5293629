//! # Scaffnet Core Library
//!
//! A library for organizing chemical scaffolds into hierarchical networks that support
//! browsing and structure-activity relationship analysis.
//!
//! ## Architectural Philosophy
//!
//! The library is the storage and export core of a scaffold analysis pipeline: an external
//! generation algorithm decomposes molecules into scaffolds and reports the resulting
//! parent/child relationships here, one call at a time. This crate records those
//! relationships faithfully and reproducibly; it never derives scaffolds, parses molecule
//! file formats, or computes chemical properties itself.
//!
//! - **[`core::models`]: The Data Model.** Arena-backed storage for scaffolds, molecules,
//!   and the `ScaffoldNetwork` multigraph that ties them together: a directed acyclic
//!   graph in which a scaffold may have many parents, each parent edge carrying a
//!   decomposition weight, anchored by a synthetic virtual root.
//!
//! - **[`core::io`]: The Export Layer.** Deterministic, bit-reproducible writers for the
//!   graph-exchange (GML) document consumed by visualization tools and for the scaffold
//!   property table consumed by spreadsheet analysis.

pub mod core;
