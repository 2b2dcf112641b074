//! # docgraph
//!
//! Projects a language's semantic symbol tree (namespaces, types, members,
//! and their relationships) into a stable, addressable document graph for
//! downstream documentation rendering.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! graph     → build pipeline (walker, identity, relations, write paths)
//!   ↓          and the resulting immutable DocumentGraph
//! snapshot  → Snapshot, SnapshotBuilder, symbol data, unit diagnostics
//!   ↓
//! base      → Primitives (UnitId, SymbolId, NodeId)
//! ```
//!
//! ## Build protocol
//!
//! A language front-end accumulates every symbol it discovered — across all
//! source units of one build — into a [`SnapshotBuilder`]. Calling
//! [`SnapshotBuilder::finish`] freezes the result into an immutable
//! [`Snapshot`]; only then is [`DocumentGraph::build`] driven over it. The
//! two-phase protocol matters: building per-unit graphs independently would
//! duplicate namespace nodes and break cross-unit relationships (a base type
//! declared in a different unit than its subtype).
//!
//! The finished [`DocumentGraph`] is plain owned data, immutable after
//! construction, and safe for unrestricted concurrent reads.

// ============================================================================
// MODULES (dependency order: base → snapshot → graph)
// ============================================================================

/// Foundation types: UnitId, SymbolId, NodeId
pub mod base;

/// Semantic snapshot: symbol arena, multi-unit accumulation, diagnostics
pub mod snapshot;

/// Document graph: build pipeline and the immutable node arena
pub mod graph;

mod error;

pub use error::GraphError;

// Re-export foundation types
pub use base::{NodeId, SymbolId, UnitId};
pub use graph::{DocumentGraph, DocumentNode, NodeKind, SpecificKind};
pub use snapshot::{
    MemberKind, Severity, Snapshot, SnapshotBuilder, TypeKind, TypeRef, UnitDiagnostic,
};
