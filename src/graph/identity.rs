//! Identity computer — derives the name attributes of each document.
//!
//! `FullName` walks the containing-type chain only (never crossing into
//! namespaces); `QualifiedName` prefixes the namespace's dotted path.
//! Generic type-parameter lists never appear in identity strings.

use smol_str::SmolStr;

use crate::base::SymbolId;
use crate::error::GraphError;
use crate::snapshot::{Snapshot, SymbolData};

use super::node::{NodeKind, SpecificKind};

/// Display token for the root namespace, which has an empty name.
pub(crate) const GLOBAL_NAMESPACE_DISPLAY: &str = "global";

/// The computed identity attributes of one document.
pub(crate) struct Identity {
    pub name: SmolStr,
    pub full_name: SmolStr,
    pub qualified_name: SmolStr,
    pub display_name: SmolStr,
    pub kind: NodeKind,
    pub specific_kind: SpecificKind,
}

/// Compute the identity of a visited symbol.
///
/// Fails with a classification error for symbol categories outside the
/// supported set; these are never coerced into a supported kind.
pub(crate) fn compute(snapshot: &Snapshot, sym: SymbolId) -> Result<Identity, GraphError> {
    match snapshot.symbol(sym) {
        SymbolData::Namespace {
            name,
            qualified_name,
            ..
        } => {
            let display_name = if qualified_name.is_empty() {
                SmolStr::new_static(GLOBAL_NAMESPACE_DISPLAY)
            } else {
                qualified_name.clone()
            };
            Ok(Identity {
                name: name.clone(),
                full_name: name.clone(),
                qualified_name: qualified_name.clone(),
                display_name,
                kind: NodeKind::Namespace,
                specific_kind: SpecificKind::Namespace,
            })
        }
        SymbolData::Type {
            name,
            kind,
            namespace,
            ..
        } => {
            let specific_kind =
                SpecificKind::of_type(kind).ok_or_else(|| GraphError::UnsupportedSymbol {
                    name: name.to_string(),
                    category: unsupported_label(kind),
                })?;
            let full_name = type_full_name(snapshot, sym);
            let qualified_name = qualify(snapshot, *namespace, &full_name);
            Ok(Identity {
                name: name.clone(),
                display_name: full_name.clone(),
                full_name,
                qualified_name,
                kind: NodeKind::NamedType,
                specific_kind,
            })
        }
        SymbolData::Member {
            name,
            kind,
            containing_type,
            ..
        } => {
            let specific_kind =
                SpecificKind::of_member(kind).ok_or_else(|| GraphError::UnsupportedSymbol {
                    name: name.to_string(),
                    category: member_unsupported_label(kind),
                })?;
            let type_chain = type_full_name(snapshot, *containing_type);
            let full_name = SmolStr::new(format!("{type_chain}.{name}"));
            let namespace = match snapshot.symbol(*containing_type) {
                SymbolData::Type { namespace, .. } => *namespace,
                _ => snapshot.root(),
            };
            let qualified_name = qualify(snapshot, namespace, &full_name);
            Ok(Identity {
                name: name.clone(),
                display_name: full_name.clone(),
                full_name,
                qualified_name,
                kind: NodeKind::Member,
                specific_kind,
            })
        }
    }
}

/// Walk the containing-type chain upward, collecting names, and join them
/// outermost-to-innermost. Never crosses into namespaces.
fn type_full_name(snapshot: &Snapshot, sym: SymbolId) -> SmolStr {
    let mut parts: Vec<&str> = Vec::new();
    let mut current = Some(sym);
    while let Some(id) = current {
        match snapshot.symbol(id) {
            SymbolData::Type {
                name,
                containing_type,
                ..
            } => {
                parts.push(name);
                current = *containing_type;
            }
            _ => break,
        }
    }
    parts.reverse();
    SmolStr::new(parts.join("."))
}

/// Prefix a full name with the namespace's dotted path, omitting the dot
/// when either side is empty.
fn qualify(snapshot: &Snapshot, namespace: SymbolId, full_name: &str) -> SmolStr {
    let path = match snapshot.symbol(namespace) {
        SymbolData::Namespace { qualified_name, .. } => qualified_name.as_str(),
        _ => "",
    };
    if path.is_empty() {
        SmolStr::new(full_name)
    } else if full_name.is_empty() {
        SmolStr::new(path)
    } else {
        SmolStr::new(format!("{path}.{full_name}"))
    }
}

fn unsupported_label(kind: &crate::snapshot::TypeKind) -> String {
    match kind {
        crate::snapshot::TypeKind::Other(label) => label.to_string(),
        other => format!("{other:?}"),
    }
}

fn member_unsupported_label(kind: &crate::snapshot::MemberKind) -> String {
    match kind {
        crate::snapshot::MemberKind::Other(label) => label.to_string(),
        other => format!("{other:?}"),
    }
}
