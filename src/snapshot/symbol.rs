//! Symbol data as captured from the front-end's semantic model.

use smol_str::SmolStr;

use crate::base::{SymbolId, UnitId};

/// The declared category of a named type.
///
/// `Other` is the extension escape hatch for front-ends with categories this
/// model does not cover; the graph build rejects it with a classification
/// error rather than silently coercing it (see [`crate::GraphError`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    /// An unsupported type category, carrying the front-end's own label.
    Other(SmolStr),
}

/// The declared category of a type member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Method,
    Property,
    Field,
    Event,
    /// An unsupported member category, carrying the front-end's own label.
    Other(SmolStr),
}

/// A reference to another type by qualified name.
///
/// The target may or may not be part of the analyzed snapshot; resolution
/// happens during the graph build, and a miss synthesizes a placeholder node
/// rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    qualified_name: SmolStr,
}

impl TypeRef {
    /// Create a reference to a type by its qualified name.
    pub fn new(qualified_name: impl Into<SmolStr>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
        }
    }

    /// The full dotted target name, as supplied by the front-end.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// The last segment of the dotted target name.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }
}

/// A symbol in the snapshot arena.
///
/// Parent/child links are positional [`SymbolId`] lookups into the arena,
/// never owning pointers, so the containment hierarchy cannot form
/// reference cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolData {
    Namespace {
        /// Simple name (last path segment; empty for the global namespace)
        name: SmolStr,
        /// Full dotted path (empty for the global namespace)
        qualified_name: SmolStr,
        parent: Option<SymbolId>,
        /// Directly nested namespaces
        namespaces: Vec<SymbolId>,
        /// Directly contained (non-nested) types
        types: Vec<SymbolId>,
        /// Units that contributed a fragment of this namespace
        units: Vec<UnitId>,
    },
    Type {
        name: SmolStr,
        /// Namespace path + containing-type chain + name, dotted
        qualified_name: SmolStr,
        kind: TypeKind,
        /// The declaring namespace (nearest enclosing, even when nested)
        namespace: SymbolId,
        /// The immediately enclosing type, if nested
        containing_type: Option<SymbolId>,
        /// Declared base class, if any
        base: Option<TypeRef>,
        /// Directly implemented interfaces
        interfaces: Vec<TypeRef>,
        /// Immediate non-type members
        members: Vec<SymbolId>,
        /// Immediately nested type declarations
        nested: Vec<SymbolId>,
        unit: UnitId,
    },
    Member {
        name: SmolStr,
        kind: MemberKind,
        containing_type: SymbolId,
        /// Compiler-generated accessor (property/event backing method);
        /// never enumerated as a member of the document graph
        synthesized: bool,
        unit: UnitId,
    },
}

impl SymbolData {
    /// Returns the simple name of this symbol
    pub fn name(&self) -> &str {
        match self {
            SymbolData::Namespace { name, .. }
            | SymbolData::Type { name, .. }
            | SymbolData::Member { name, .. } => name,
        }
    }

    /// Returns true if this symbol is a namespace
    pub fn is_namespace(&self) -> bool {
        matches!(self, SymbolData::Namespace { .. })
    }

    /// Returns true if this symbol is a type
    pub fn is_type(&self) -> bool {
        matches!(self, SymbolData::Type { .. })
    }

    /// Returns the unit that declared this symbol (namespaces are declared
    /// by every contributing unit and return None here)
    pub fn declaring_unit(&self) -> Option<UnitId> {
        match self {
            SymbolData::Namespace { .. } => None,
            SymbolData::Type { unit, .. } | SymbolData::Member { unit, .. } => Some(*unit),
        }
    }
}
