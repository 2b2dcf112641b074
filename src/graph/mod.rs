//! Document graph — the build pipeline and the immutable result.
//!
//! [`DocumentGraph::build`] runs a single synchronous pass over a frozen
//! [`Snapshot`]: the walker flattens the symbol hierarchy, the identity
//! computer derives name attributes, the relationship resolver materializes
//! containment and reference links (synthesizing placeholders for external
//! symbols), and the write path generator assigns each named type its
//! deterministic output location.
//!
//! The finished graph is a flat arena of [`DocumentNode`]s addressed by
//! [`NodeId`]; it is never mutated afterwards and is safe for unrestricted
//! concurrent reads by any number of renderers.

mod identity;
mod node;
mod relations;
mod walker;
mod write_path;

pub use node::{DocumentNode, NodeKind, SpecificKind};

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::NodeId;
use crate::error::GraphError;
use crate::snapshot::{Snapshot, UnitDiagnostic};

/// The finished, immutable set of interlinked documents.
#[derive(Debug)]
pub struct DocumentGraph {
    /// Flat arena owning every node, snapshot-resident and placeholder alike
    nodes: Vec<DocumentNode>,
    /// Index for O(1) resident-type lookups by qualified name
    types_by_qname: FxHashMap<SmolStr, NodeId>,
    /// Diagnostics for the source units whose symbols were skipped
    diagnostics: Vec<UnitDiagnostic>,
}

impl DocumentGraph {
    /// Build the document graph from a frozen snapshot.
    ///
    /// Construction order never affects attribute values: every attribute
    /// is derived from the snapshot structure, so consumers may compare
    /// node sets unordered.
    pub fn build(snapshot: &Snapshot) -> Result<Self, GraphError> {
        let order = walker::walk(snapshot);

        // Pass 1: one node per visited symbol, identity attributes computed
        let mut nodes = Vec::with_capacity(order.len());
        let mut node_of =
            FxHashMap::with_capacity_and_hasher(order.len(), Default::default());
        for sym in &order {
            let identity = identity::compute(snapshot, *sym)?;
            let id = NodeId::new(nodes.len());
            nodes.push(DocumentNode::resident(id, identity));
            node_of.insert(*sym, id);
        }

        // Pass 2: containment and reference relationships; placeholders for
        // external symbols are appended to the arena as they are first seen
        let mut resolver = relations::Resolver::new(snapshot, &node_of);
        for sym in &order {
            resolver.resolve(&mut nodes, *sym);
        }

        // Pass 3: deterministic output paths, collision-checked
        write_path::assign(&mut nodes)?;

        let mut types_by_qname = FxHashMap::default();
        for node in &nodes {
            if node.kind == NodeKind::NamedType && !node.external {
                types_by_qname.insert(node.qualified_name.clone(), node.id);
            }
        }

        tracing::debug!(
            documents = order.len(),
            placeholders = nodes.len() - order.len(),
            types = types_by_qname.len(),
            "document graph built"
        );

        Ok(Self {
            nodes,
            types_by_qname,
            diagnostics: snapshot.diagnostics().to_vec(),
        })
    }

    /// Get a node by id (O(1) arena lookup).
    pub fn get(&self, id: NodeId) -> &DocumentNode {
        &self.nodes[id.index()]
    }

    /// Every node in the arena, placeholders included.
    pub fn nodes(&self) -> impl Iterator<Item = &DocumentNode> {
        self.nodes.iter()
    }

    /// The renderer-facing output sequence: one document per visited
    /// symbol. Placeholder nodes stay out of this sequence but remain
    /// addressable through references.
    pub fn documents(&self) -> impl Iterator<Item = &DocumentNode> {
        self.nodes.iter().filter(|n| !n.external)
    }

    /// Snapshot-resident named type documents.
    pub fn types(&self) -> impl Iterator<Item = &DocumentNode> {
        self.documents().filter(|n| n.kind == NodeKind::NamedType)
    }

    /// Namespace documents.
    pub fn namespaces(&self) -> impl Iterator<Item = &DocumentNode> {
        self.documents().filter(|n| n.kind == NodeKind::Namespace)
    }

    /// Member documents.
    pub fn members(&self) -> impl Iterator<Item = &DocumentNode> {
        self.documents().filter(|n| n.kind == NodeKind::Member)
    }

    /// Find a snapshot-resident type by its exact qualified name.
    pub fn find_type(&self, qualified_name: &str) -> Option<&DocumentNode> {
        self.types_by_qname
            .get(qualified_name)
            .map(|id| self.get(*id))
    }

    /// Diagnostics carried over from source units whose symbols were
    /// skipped during snapshot construction.
    pub fn diagnostics(&self) -> &[UnitDiagnostic] {
        &self.diagnostics
    }

    /// Number of documents in the output sequence (placeholders excluded).
    pub fn document_count(&self) -> usize {
        self.documents().count()
    }
}
