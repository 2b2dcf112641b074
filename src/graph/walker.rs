//! Symbol walker — flattens the snapshot hierarchy for the build pass.

use rustc_hash::FxHashSet;

use crate::base::SymbolId;
use crate::snapshot::{Snapshot, SymbolData};

/// Collect every namespace, type, and member reachable from the global
/// namespace, each exactly once.
///
/// Synthesized accessor members are skipped entirely; they never become
/// documents. The returned order is an implementation detail — every
/// downstream computation derives attributes from the snapshot structure,
/// not from visit order.
pub(crate) fn walk(snapshot: &Snapshot) -> Vec<SymbolId> {
    let mut visited = FxHashSet::default();
    let mut order = Vec::new();
    let mut stack = vec![snapshot.root()];

    while let Some(sym) = stack.pop() {
        if !visited.insert(sym) {
            continue;
        }
        match snapshot.symbol(sym) {
            SymbolData::Namespace {
                namespaces, types, ..
            } => {
                order.push(sym);
                stack.extend(namespaces.iter().rev());
                stack.extend(types.iter().rev());
            }
            SymbolData::Type {
                members, nested, ..
            } => {
                order.push(sym);
                stack.extend(members.iter().rev());
                stack.extend(nested.iter().rev());
            }
            SymbolData::Member { synthesized, .. } => {
                if !*synthesized {
                    order.push(sym);
                }
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{MemberKind, SnapshotBuilder, TypeKind};

    #[test]
    fn visits_every_symbol_once() {
        let mut builder = SnapshotBuilder::new();
        let unit = builder.begin_unit("a");
        let foo = builder.namespace("Foo", unit);
        let green = builder.add_type(foo, "Green", TypeKind::Class, unit);
        builder.add_nested_type(green, "Blue", TypeKind::Class, unit);
        builder.add_member(green, "Run", MemberKind::Method, false, unit);
        let snapshot = builder.finish();

        let order = walk(&snapshot);
        // root, Foo, Green, Blue, Run
        assert_eq!(order.len(), 5);
        let unique: FxHashSet<_> = order.iter().collect();
        assert_eq!(unique.len(), order.len());
    }

    #[test]
    fn skips_synthesized_accessors() {
        let mut builder = SnapshotBuilder::new();
        let unit = builder.begin_unit("a");
        let foo = builder.namespace("Foo", unit);
        let blue = builder.add_type(foo, "Blue", TypeKind::Class, unit);
        builder.add_member(blue, "Red", MemberKind::Property, false, unit);
        builder.add_member(blue, "get_Red", MemberKind::Method, true, unit);
        let snapshot = builder.finish();

        let order = walk(&snapshot);
        let names: Vec<&str> = order
            .iter()
            .map(|id| snapshot.symbol(*id).name())
            .collect();
        assert!(names.contains(&"Red"));
        assert!(!names.contains(&"get_Red"));
    }
}
