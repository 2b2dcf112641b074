//! Foundation types for the document graph toolchain.
//!
//! This module provides the index newtypes used for arena addressing:
//! - [`UnitId`] - Source unit identifiers
//! - [`SymbolId`] - Symbols in the snapshot arena
//! - [`NodeId`] - Nodes in the document graph arena
//!
//! This module has NO dependencies on other docgraph modules.

mod ids;

pub use ids::{NodeId, SymbolId, UnitId};
