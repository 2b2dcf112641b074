//! Semantic snapshot — the immutable symbol universe for one build.
//!
//! The front-end collaborator feeds every symbol it discovered into a
//! [`SnapshotBuilder`], across all source units of a build, before any graph
//! is constructed (two-phase protocol). [`SnapshotBuilder::finish`] prunes
//! symbols declared only in failed units, builds the qualified-name index,
//! and freezes everything into a [`Snapshot`].
//!
//! A snapshot is never mutated after `finish`; the graph build only reads it.

mod builder;
mod diagnostics;
mod symbol;

pub use builder::SnapshotBuilder;
pub use diagnostics::{Severity, UnitDiagnostic};
pub use symbol::{MemberKind, SymbolData, TypeKind, TypeRef};

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{SymbolId, UnitId};

/// The complete, immutable semantic model covering all analyzed units of one
/// build.
///
/// Produced by [`SnapshotBuilder::finish`]. Symbols live in a flat arena and
/// reference each other by [`SymbolId`]; child lists have already been
/// filtered of pruned symbols, so traversal from [`Snapshot::root`] only
/// reaches surviving symbols.
#[derive(Debug)]
pub struct Snapshot {
    /// Arena storage for all symbols - single source of truth
    pub(crate) arena: Vec<SymbolData>,
    /// The global namespace symbol (always index 0)
    pub(crate) root: SymbolId,
    /// Index for O(1) type lookups by qualified name
    pub(crate) types_by_qname: FxHashMap<SmolStr, SymbolId>,
    /// Names of the source units that contributed to this snapshot
    pub(crate) unit_names: Vec<SmolStr>,
    /// Diagnostics from units whose symbols were skipped
    pub(crate) diagnostics: Vec<UnitDiagnostic>,
}

impl Snapshot {
    /// The global namespace symbol.
    pub fn root(&self) -> SymbolId {
        self.root
    }

    /// Get a symbol by its SymbolId (O(1) arena lookup).
    pub fn symbol(&self, id: SymbolId) -> &SymbolData {
        &self.arena[id.index()]
    }

    /// Find a type symbol by its exact qualified name (O(1) index lookup).
    ///
    /// Only snapshot-resident types are found; references that miss here
    /// resolve to placeholder nodes during the graph build.
    pub fn find_type(&self, qualified_name: &str) -> Option<SymbolId> {
        self.types_by_qname.get(qualified_name).copied()
    }

    /// The name of a contributing source unit.
    pub fn unit_name(&self, unit: UnitId) -> &str {
        &self.unit_names[unit.index()]
    }

    /// Diagnostics reported for units whose symbols were skipped.
    pub fn diagnostics(&self) -> &[UnitDiagnostic] {
        &self.diagnostics
    }

    /// Total number of symbols in the arena (including pruned ones, which
    /// are simply unreachable from the root).
    pub fn symbol_count(&self) -> usize {
        self.arena.len()
    }
}
