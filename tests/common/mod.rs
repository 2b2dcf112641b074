//! Shared fixtures and assertion helpers for document graph tests.

#![allow(dead_code)]

use docgraph::{DocumentGraph, DocumentNode, Snapshot, SnapshotBuilder, TypeKind};

/// Build a graph, panicking on errors (fixtures are known-good).
pub fn build(snapshot: &Snapshot) -> DocumentGraph {
    DocumentGraph::build(snapshot).expect("graph build failed")
}

/// The recurring fixture from the behavioral suite:
///
/// ```text
/// namespace Foo {
///     class Green { class Blue {} }
///     struct Red {}
/// }
/// namespace Foo.Bar {
///     enum Yellow {}
/// }
/// ```
pub fn color_types_snapshot() -> Snapshot {
    let mut builder = SnapshotBuilder::new();
    let unit = builder.begin_unit("colors");
    let foo = builder.namespace("Foo", unit);
    let green = builder.add_type(foo, "Green", TypeKind::Class, unit);
    builder.add_nested_type(green, "Blue", TypeKind::Class, unit);
    builder.add_type(foo, "Red", TypeKind::Struct, unit);
    let bar = builder.namespace("Foo.Bar", unit);
    builder.add_type(bar, "Yellow", TypeKind::Enum, unit);
    builder.finish()
}

/// Find the single document with the given simple name.
pub fn get<'a>(graph: &'a DocumentGraph, name: &str) -> &'a DocumentNode {
    let mut matches = graph.documents().filter(|n| n.name() == name);
    let node = matches
        .next()
        .unwrap_or_else(|| panic!("no document named `{name}`"));
    assert!(
        matches.next().is_none(),
        "more than one document named `{name}`"
    );
    node
}

/// Assert two name collections are equal ignoring order.
pub fn assert_unordered_eq(actual: Vec<&str>, expected: &[&str]) {
    let mut actual = actual;
    actual.sort_unstable();
    let mut expected: Vec<&str> = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(actual, expected);
}

/// The simple names of the nodes behind a list of references.
pub fn names_of<'a>(graph: &'a DocumentGraph, ids: &[docgraph::NodeId]) -> Vec<&'a str> {
    ids.iter().map(|id| graph.get(*id).name()).collect()
}
