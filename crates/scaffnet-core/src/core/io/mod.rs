//! Provides output functionality for graph and table file formats.
//!
//! This module contains implementations for writing scaffold networks to the
//! textual formats consumed by downstream visualization and analysis tools. It
//! provides a unified trait-based interface for export operations and includes
//! utilities for canonical ordering of network components.

pub mod gml;
pub(crate) mod sorting;
pub mod table;
pub mod traits;
