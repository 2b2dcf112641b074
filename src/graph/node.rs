//! Document nodes — the unit of graph output.

use smol_str::SmolStr;

use crate::base::NodeId;
use crate::snapshot::{MemberKind, TypeKind};

use super::identity::Identity;

/// Coarse category of a document node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    NamedType,
    Namespace,
    Member,
}

impl NodeKind {
    /// Get a display string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::NamedType => "NamedType",
            NodeKind::Namespace => "Namespace",
            NodeKind::Member => "Member",
        }
    }
}

/// Fine-grained category of a document node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecificKind {
    Namespace,
    // NamedType
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    // Member
    Method,
    Property,
    Field,
    Event,
}

impl SpecificKind {
    /// Map a snapshot type kind; `None` for unsupported categories.
    pub(crate) fn of_type(kind: &TypeKind) -> Option<Self> {
        match kind {
            TypeKind::Class => Some(Self::Class),
            TypeKind::Struct => Some(Self::Struct),
            TypeKind::Interface => Some(Self::Interface),
            TypeKind::Enum => Some(Self::Enum),
            TypeKind::Delegate => Some(Self::Delegate),
            TypeKind::Other(_) => None,
        }
    }

    /// Map a snapshot member kind; `None` for unsupported categories.
    pub(crate) fn of_member(kind: &MemberKind) -> Option<Self> {
        match kind {
            MemberKind::Method => Some(Self::Method),
            MemberKind::Property => Some(Self::Property),
            MemberKind::Field => Some(Self::Field),
            MemberKind::Event => Some(Self::Event),
            MemberKind::Other(_) => None,
        }
    }

    /// Get a display string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecificKind::Namespace => "Namespace",
            SpecificKind::Class => "Class",
            SpecificKind::Struct => "Struct",
            SpecificKind::Interface => "Interface",
            SpecificKind::Enum => "Enum",
            SpecificKind::Delegate => "Delegate",
            SpecificKind::Method => "Method",
            SpecificKind::Property => "Property",
            SpecificKind::Field => "Field",
            SpecificKind::Event => "Event",
        }
    }
}

/// An identity-tagged, attribute-bearing document in the graph.
///
/// All references between nodes are [`NodeId`]s into the graph's flat arena;
/// parent/child links are positional lookups, never owning pointers.
/// Placeholder nodes (see [`DocumentNode::is_external`]) represent symbols
/// outside the analyzed snapshot: they carry only identity strings equal to
/// the external name and expose no members or base type of their own.
#[derive(Clone, Debug)]
pub struct DocumentNode {
    pub(crate) id: NodeId,
    pub(crate) kind: NodeKind,
    pub(crate) specific_kind: SpecificKind,
    pub(crate) name: SmolStr,
    pub(crate) full_name: SmolStr,
    pub(crate) qualified_name: SmolStr,
    pub(crate) display_name: SmolStr,
    pub(crate) containing_namespace: Option<NodeId>,
    pub(crate) containing_type: Option<NodeId>,
    pub(crate) base_type: Option<NodeId>,
    pub(crate) all_interfaces: Vec<NodeId>,
    pub(crate) members: Vec<NodeId>,
    pub(crate) member_types: Vec<NodeId>,
    pub(crate) write_path: Option<String>,
    pub(crate) external: bool,
}

impl DocumentNode {
    /// Create a snapshot-resident node; relationships are filled in by the
    /// resolver pass.
    pub(crate) fn resident(id: NodeId, identity: Identity) -> Self {
        Self {
            id,
            kind: identity.kind,
            specific_kind: identity.specific_kind,
            name: identity.name,
            full_name: identity.full_name,
            qualified_name: identity.qualified_name,
            display_name: identity.display_name,
            containing_namespace: None,
            containing_type: None,
            base_type: None,
            all_interfaces: Vec::new(),
            members: Vec::new(),
            member_types: Vec::new(),
            write_path: None,
            external: false,
        }
    }

    /// Create a placeholder for a symbol outside the analyzed snapshot.
    pub(crate) fn placeholder(id: NodeId, qualified_name: &str, kind: SpecificKind) -> Self {
        let name = qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(qualified_name);
        Self {
            id,
            kind: NodeKind::NamedType,
            specific_kind: kind,
            name: SmolStr::new(name),
            full_name: SmolStr::new(name),
            qualified_name: SmolStr::new(qualified_name),
            display_name: SmolStr::new(name),
            containing_namespace: None,
            containing_type: None,
            base_type: None,
            all_interfaces: Vec::new(),
            members: Vec::new(),
            member_types: Vec::new(),
            write_path: None,
            external: true,
        }
    }

    /// This node's id in the graph arena.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Coarse category tag.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Fine-grained category tag.
    pub fn specific_kind(&self) -> SpecificKind {
        self.specific_kind
    }

    /// Simple identifier as declared (empty for the global namespace).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dotted chain of enclosing type names only, outermost to self.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Full name prefixed by the dotted namespace path.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Full name for types and members; dotted path (or `"global"`) for
    /// namespaces.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Nearest enclosing namespace node.
    pub fn containing_namespace(&self) -> Option<NodeId> {
        self.containing_namespace
    }

    /// Nearest enclosing type node; `None` for namespace-scoped symbols.
    pub fn containing_type(&self) -> Option<NodeId> {
        self.containing_type
    }

    /// The type's base, graph-resident or placeholder.
    pub fn base_type(&self) -> Option<NodeId> {
        self.base_type
    }

    /// Every directly and indirectly implemented interface, de-duplicated,
    /// in stable first-seen order.
    pub fn all_interfaces(&self) -> &[NodeId] {
        &self.all_interfaces
    }

    /// Immediate non-type members (methods, properties, fields, events).
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    /// Immediately nested type nodes.
    pub fn member_types(&self) -> &[NodeId] {
        &self.member_types
    }

    /// Output path; present exactly on snapshot-resident named types.
    pub fn write_path(&self) -> Option<&str> {
        self.write_path.as_deref()
    }

    /// Whether this is a placeholder for a symbol outside the snapshot.
    pub fn is_external(&self) -> bool {
        self.external
    }
}
