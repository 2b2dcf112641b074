//! Snapshot accumulation across source units.
//!
//! The builder is phase one of the two-phase protocol: the front-end feeds
//! in every symbol from every source unit, then [`SnapshotBuilder::finish`]
//! freezes the arena into an immutable [`Snapshot`]. Symbols declared only
//! in units the front-end reported as failed are pruned at that point, and
//! the failure diagnostics ride along on the snapshot.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use crate::base::{SymbolId, UnitId};

use super::diagnostics::UnitDiagnostic;
use super::symbol::{MemberKind, SymbolData, TypeKind, TypeRef};
use super::Snapshot;

pub struct SnapshotBuilder {
    /// Arena storage for all symbols - single source of truth
    arena: Vec<SymbolData>,
    /// Index mapping full dotted namespace paths to their single symbol
    namespaces_by_path: FxHashMap<SmolStr, SymbolId>,
    unit_names: Vec<SmolStr>,
    failed_units: FxHashSet<UnitId>,
    diagnostics: Vec<UnitDiagnostic>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        let root = SymbolData::Namespace {
            name: SmolStr::default(),
            qualified_name: SmolStr::default(),
            parent: None,
            namespaces: Vec::new(),
            types: Vec::new(),
            units: Vec::new(),
        };
        let mut namespaces_by_path = FxHashMap::default();
        namespaces_by_path.insert(SmolStr::default(), SymbolId::new(0));
        Self {
            arena: vec![root],
            namespaces_by_path,
            unit_names: Vec::new(),
            failed_units: FxHashSet::default(),
            diagnostics: Vec::new(),
        }
    }

    /// The global namespace symbol (always present).
    pub fn root(&self) -> SymbolId {
        SymbolId::new(0)
    }

    /// Register a source unit; symbols inserted afterwards are tagged with
    /// the returned id.
    pub fn begin_unit(&mut self, name: impl Into<SmolStr>) -> UnitId {
        let id = UnitId::new(self.unit_names.len());
        self.unit_names.push(name.into());
        id
    }

    /// Mark a unit as failed and record the front-end's diagnostic.
    ///
    /// At [`finish`](Self::finish) time, types and members declared in this
    /// unit are pruned from the snapshot; namespaces survive as long as any
    /// other unit contributed to them or they still contain live symbols.
    pub fn fail_unit(&mut self, unit: UnitId, message: impl Into<Arc<str>>) {
        self.failed_units.insert(unit);
        self.diagnostics.push(UnitDiagnostic::error(unit, message));
    }

    /// Record a non-fatal diagnostic against a unit.
    ///
    /// Unlike [`fail_unit`](Self::fail_unit), the unit's symbols stay in the
    /// snapshot; the warning just rides along for the caller to report.
    pub fn warn_unit(&mut self, unit: UnitId, message: impl Into<Arc<str>>) {
        self.diagnostics
            .push(UnitDiagnostic::warning(unit, message));
    }

    /// Get or create the namespace chain for a dotted path.
    ///
    /// Each distinct full namespace path maps to exactly one symbol no
    /// matter how many units or fragments declare it; `Foo.Bar` always nests
    /// inside `Foo`. An empty path is the global namespace.
    pub fn namespace(&mut self, path: &str, unit: UnitId) -> SymbolId {
        if path.is_empty() {
            return self.root();
        }
        let mut current = self.root();
        let mut full = String::new();
        for segment in path.split('.') {
            if !full.is_empty() {
                full.push('.');
            }
            full.push_str(segment);
            current = match self.namespaces_by_path.get(full.as_str()) {
                Some(id) => *id,
                None => {
                    let id = SymbolId::new(self.arena.len());
                    self.arena.push(SymbolData::Namespace {
                        name: SmolStr::new(segment),
                        qualified_name: SmolStr::new(&full),
                        parent: Some(current),
                        namespaces: Vec::new(),
                        types: Vec::new(),
                        units: Vec::new(),
                    });
                    if let SymbolData::Namespace { namespaces, .. } =
                        &mut self.arena[current.index()]
                    {
                        namespaces.push(id);
                    }
                    self.namespaces_by_path.insert(SmolStr::new(&full), id);
                    id
                }
            };
            self.touch_namespace(current, unit);
        }
        current
    }

    /// Add a namespace-scoped type declaration.
    pub fn add_type(
        &mut self,
        namespace: SymbolId,
        name: impl Into<SmolStr>,
        kind: TypeKind,
        unit: UnitId,
    ) -> SymbolId {
        let name = name.into();
        let ns_path = match &self.arena[namespace.index()] {
            SymbolData::Namespace { qualified_name, .. } => qualified_name.clone(),
            _ => panic!("add_type requires a namespace symbol"),
        };
        let qualified_name = join_dotted(&ns_path, &name);
        let id = SymbolId::new(self.arena.len());
        self.arena.push(SymbolData::Type {
            name,
            qualified_name,
            kind,
            namespace,
            containing_type: None,
            base: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            nested: Vec::new(),
            unit,
        });
        if let SymbolData::Namespace { types, .. } = &mut self.arena[namespace.index()] {
            types.push(id);
        }
        id
    }

    /// Add a type declaration nested inside another type.
    ///
    /// The nested type shares the outer type's declaring namespace.
    pub fn add_nested_type(
        &mut self,
        outer: SymbolId,
        name: impl Into<SmolStr>,
        kind: TypeKind,
        unit: UnitId,
    ) -> SymbolId {
        let name = name.into();
        let (namespace, outer_qname) = match &self.arena[outer.index()] {
            SymbolData::Type {
                namespace,
                qualified_name,
                ..
            } => (*namespace, qualified_name.clone()),
            _ => panic!("add_nested_type requires a type symbol"),
        };
        let qualified_name = join_dotted(&outer_qname, &name);
        let id = SymbolId::new(self.arena.len());
        self.arena.push(SymbolData::Type {
            name,
            qualified_name,
            kind,
            namespace,
            containing_type: Some(outer),
            base: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            nested: Vec::new(),
            unit,
        });
        if let SymbolData::Type { nested, .. } = &mut self.arena[outer.index()] {
            nested.push(id);
        }
        id
    }

    /// Declare a type's base class.
    pub fn set_base(&mut self, ty: SymbolId, base: TypeRef) {
        match &mut self.arena[ty.index()] {
            SymbolData::Type { base: slot, .. } => *slot = Some(base),
            _ => panic!("set_base requires a type symbol"),
        }
    }

    /// Declare a directly implemented interface on a type.
    pub fn add_interface(&mut self, ty: SymbolId, interface: TypeRef) {
        match &mut self.arena[ty.index()] {
            SymbolData::Type { interfaces, .. } => interfaces.push(interface),
            _ => panic!("add_interface requires a type symbol"),
        }
    }

    /// Add an immediate member (method, property, field, event) to a type.
    ///
    /// `synthesized` marks compiler-generated accessor methods; these stay
    /// in the snapshot but are never visited by the graph build.
    pub fn add_member(
        &mut self,
        ty: SymbolId,
        name: impl Into<SmolStr>,
        kind: MemberKind,
        synthesized: bool,
        unit: UnitId,
    ) -> SymbolId {
        let id = SymbolId::new(self.arena.len());
        self.arena.push(SymbolData::Member {
            name: name.into(),
            kind,
            containing_type: ty,
            synthesized,
            unit,
        });
        match &mut self.arena[ty.index()] {
            SymbolData::Type { members, .. } => members.push(id),
            _ => panic!("add_member requires a type symbol"),
        }
        id
    }

    /// Freeze the accumulated symbols into an immutable [`Snapshot`].
    ///
    /// Prunes symbols declared only in failed units, filters child lists so
    /// traversal from the root never reaches a pruned symbol, and builds the
    /// qualified-name index over the surviving types.
    pub fn finish(mut self) -> Snapshot {
        let dead = self.compute_dead();

        // Filter pruned ids out of every child list
        for sym in &mut self.arena {
            match sym {
                SymbolData::Namespace {
                    namespaces, types, ..
                } => {
                    namespaces.retain(|c| !dead[c.index()]);
                    types.retain(|c| !dead[c.index()]);
                }
                SymbolData::Type {
                    members, nested, ..
                } => {
                    members.retain(|c| !dead[c.index()]);
                    nested.retain(|c| !dead[c.index()]);
                }
                SymbolData::Member { .. } => {}
            }
        }

        let mut types_by_qname = FxHashMap::default();
        for (index, sym) in self.arena.iter().enumerate() {
            if dead[index] {
                continue;
            }
            if let SymbolData::Type { qualified_name, .. } = sym {
                types_by_qname.insert(qualified_name.clone(), SymbolId::new(index));
            }
        }

        tracing::debug!(
            symbols = self.arena.len(),
            types = types_by_qname.len(),
            units = self.unit_names.len(),
            skipped_units = self.failed_units.len(),
            "snapshot frozen"
        );

        Snapshot {
            arena: self.arena,
            root: SymbolId::new(0),
            types_by_qname,
            unit_names: self.unit_names,
            diagnostics: self.diagnostics,
        }
    }

    /// Record a unit as a contributor to a namespace fragment.
    fn touch_namespace(&mut self, ns: SymbolId, unit: UnitId) {
        if let SymbolData::Namespace { units, .. } = &mut self.arena[ns.index()] {
            if !units.contains(&unit) {
                units.push(unit);
            }
        }
    }

    /// Mark every symbol that must not survive `finish`.
    fn compute_dead(&self) -> Vec<bool> {
        let mut dead = vec![false; self.arena.len()];
        if self.failed_units.is_empty() {
            return dead;
        }

        // Types and members declared in failed units
        let mut stack: Vec<SymbolId> = Vec::new();
        for (index, sym) in self.arena.iter().enumerate() {
            if let Some(unit) = sym.declaring_unit() {
                if self.failed_units.contains(&unit) {
                    dead[index] = true;
                    if sym.is_type() {
                        stack.push(SymbolId::new(index));
                    }
                }
            }
        }

        // Everything nested under a dead type dies with it
        while let Some(ty) = stack.pop() {
            if let SymbolData::Type {
                members, nested, ..
            } = &self.arena[ty.index()]
            {
                for child in members.iter().chain(nested) {
                    if !dead[child.index()] {
                        dead[child.index()] = true;
                        if self.arena[child.index()].is_type() {
                            stack.push(*child);
                        }
                    }
                }
            }
        }

        // Namespaces contributed only by failed units, left with no live
        // children. Children always have larger arena indices than their
        // parents, so one reverse pass settles the whole tree.
        for index in (0..self.arena.len()).rev() {
            if let SymbolData::Namespace {
                parent: Some(_),
                units,
                namespaces,
                types,
                ..
            } = &self.arena[index]
            {
                let all_units_failed =
                    !units.is_empty() && units.iter().all(|u| self.failed_units.contains(u));
                let no_live_children = namespaces.iter().all(|c| dead[c.index()])
                    && types.iter().all(|c| dead[c.index()]);
                if all_units_failed && no_live_children {
                    dead[index] = true;
                }
            }
        }

        dead
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Join two dotted segments, tolerating an empty left side.
fn join_dotted(prefix: &str, name: &str) -> SmolStr {
    if prefix.is_empty() {
        SmolStr::new(name)
    } else {
        SmolStr::new(format!("{prefix}.{name}"))
    }
}
