//! Relationship resolver — containment, base types, interface closures.
//!
//! References that point outside the analyzed snapshot never fail: they
//! resolve to synthesized placeholder nodes, interned per
//! `(qualified name, kind)` so every pointer to the same external symbol
//! lands on the same node.

use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use crate::base::{NodeId, SymbolId};
use crate::snapshot::{Snapshot, SymbolData, TypeKind, TypeRef};

use super::node::{DocumentNode, SpecificKind};

pub(crate) struct Resolver<'a> {
    snapshot: &'a Snapshot,
    /// Snapshot symbol → graph node, for every walked symbol
    node_of: &'a FxHashMap<SymbolId, NodeId>,
    /// Placeholder intern table: (qualified name, kind) → node
    placeholders: FxHashMap<(SmolStr, SpecificKind), NodeId>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(snapshot: &'a Snapshot, node_of: &'a FxHashMap<SymbolId, NodeId>) -> Self {
        Self {
            snapshot,
            node_of,
            placeholders: FxHashMap::default(),
        }
    }

    /// Materialize every relationship attribute of one node.
    ///
    /// Placeholder nodes created along the way are appended to `nodes`.
    pub(crate) fn resolve(&mut self, nodes: &mut Vec<DocumentNode>, sym: SymbolId) {
        let snapshot = self.snapshot;
        let node = self.node_of[&sym];
        match snapshot.symbol(sym) {
            SymbolData::Namespace { parent, types, .. } => {
                let containing_namespace = parent.map(|p| self.node_of[&p]);
                let member_types = self.to_nodes(types);
                let slot = &mut nodes[node.index()];
                slot.containing_namespace = containing_namespace;
                slot.member_types = member_types;
            }
            SymbolData::Type {
                namespace,
                containing_type,
                members,
                nested,
                ..
            } => {
                let containing_namespace = Some(self.node_of[namespace]);
                let containing_type = containing_type.map(|t| self.node_of[&t]);
                // Synthesized members were never walked, so they simply have
                // no node to collect here
                let member_nodes = self.to_nodes(members);
                let member_types = self.to_nodes(nested);
                let base_type = self.base_type(nodes, sym);
                let all_interfaces = self.all_interfaces(nodes, sym);
                let slot = &mut nodes[node.index()];
                slot.containing_namespace = containing_namespace;
                slot.containing_type = containing_type;
                slot.members = member_nodes;
                slot.member_types = member_types;
                slot.base_type = base_type;
                slot.all_interfaces = all_interfaces;
            }
            SymbolData::Member {
                containing_type, ..
            } => {
                let namespace = match snapshot.symbol(*containing_type) {
                    SymbolData::Type { namespace, .. } => *namespace,
                    _ => self.snapshot.root(),
                };
                let slot = &mut nodes[node.index()];
                slot.containing_namespace = Some(self.node_of[&namespace]);
                slot.containing_type = Some(self.node_of[containing_type]);
            }
        }
    }

    /// Resolve a type's base per its declared category.
    ///
    /// Classes fall back to the universal `Object` base; structs and enums
    /// always report their implicit value-type bases; interfaces have no
    /// base-type relation in this model.
    fn base_type(&mut self, nodes: &mut Vec<DocumentNode>, sym: SymbolId) -> Option<NodeId> {
        let snapshot = self.snapshot;
        let SymbolData::Type { kind, base, .. } = snapshot.symbol(sym) else {
            return None;
        };
        match kind {
            TypeKind::Class => match base {
                Some(base_ref) => Some(self.resolve_type_ref(nodes, base_ref, SpecificKind::Class)),
                None => Some(self.placeholder(nodes, "Object", SpecificKind::Class)),
            },
            TypeKind::Struct => Some(self.placeholder(nodes, "ValueType", SpecificKind::Class)),
            TypeKind::Enum => Some(self.placeholder(nodes, "Enum", SpecificKind::Class)),
            TypeKind::Delegate => {
                Some(self.placeholder(nodes, "MulticastDelegate", SpecificKind::Class))
            }
            TypeKind::Interface | TypeKind::Other(_) => None,
        }
    }

    /// The transitive closure of implemented interfaces: direct
    /// declarations, super-interfaces of snapshot-resident interfaces, and
    /// everything inherited through the snapshot-resident base chain.
    /// De-duplicated by node identity, stable first-seen order, cycle-safe.
    fn all_interfaces(&mut self, nodes: &mut Vec<DocumentNode>, sym: SymbolId) -> Vec<NodeId> {
        let mut out: IndexSet<NodeId> = IndexSet::new();
        let mut seen: FxHashSet<SymbolId> = FxHashSet::default();
        self.collect_interfaces(nodes, sym, &mut out, &mut seen);
        out.into_iter().collect()
    }

    fn collect_interfaces(
        &mut self,
        nodes: &mut Vec<DocumentNode>,
        sym: SymbolId,
        out: &mut IndexSet<NodeId>,
        seen: &mut FxHashSet<SymbolId>,
    ) {
        if !seen.insert(sym) {
            return;
        }
        let snapshot = self.snapshot;
        let SymbolData::Type {
            interfaces, base, ..
        } = snapshot.symbol(sym)
        else {
            return;
        };
        for interface_ref in interfaces {
            let node = self.resolve_type_ref(nodes, interface_ref, SpecificKind::Interface);
            out.insert(node);
            // Snapshot-resident interfaces contribute their own
            // super-interfaces; external ones are opaque
            if let Some(super_sym) = snapshot.find_type(interface_ref.qualified_name()) {
                self.collect_interfaces(nodes, super_sym, out, seen);
            }
        }
        if let Some(base_ref) = base {
            if let Some(base_sym) = snapshot.find_type(base_ref.qualified_name()) {
                self.collect_interfaces(nodes, base_sym, out, seen);
            }
        }
    }

    /// Resolve a qualified-name reference to a graph-resident node, or
    /// synthesize a placeholder when the target is outside the snapshot.
    fn resolve_type_ref(
        &mut self,
        nodes: &mut Vec<DocumentNode>,
        target: &TypeRef,
        kind: SpecificKind,
    ) -> NodeId {
        match self.snapshot.find_type(target.qualified_name()) {
            Some(sym) => {
                tracing::trace!(reference = target.qualified_name(), "resolved in snapshot");
                self.node_of[&sym]
            }
            None => {
                tracing::trace!(
                    reference = target.qualified_name(),
                    "external, synthesizing placeholder"
                );
                self.placeholder(nodes, target.qualified_name(), kind)
            }
        }
    }

    /// Intern a placeholder node for an external symbol.
    fn placeholder(
        &mut self,
        nodes: &mut Vec<DocumentNode>,
        qualified_name: &str,
        kind: SpecificKind,
    ) -> NodeId {
        let key = (SmolStr::new(qualified_name), kind);
        if let Some(existing) = self.placeholders.get(&key) {
            return *existing;
        }
        let id = NodeId::new(nodes.len());
        nodes.push(DocumentNode::placeholder(id, qualified_name, kind));
        self.placeholders.insert(key, id);
        id
    }

    fn to_nodes(&self, symbols: &[SymbolId]) -> Vec<NodeId> {
        symbols
            .iter()
            .filter_map(|s| self.node_of.get(s).copied())
            .collect()
    }
}
