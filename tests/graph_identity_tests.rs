//! Identity attribute tests: Name, FullName, QualifiedName, DisplayName,
//! Kind, SpecificKind.

mod common;

use common::*;
use docgraph::{
    DocumentGraph, GraphError, MemberKind, NodeKind, SnapshotBuilder, SpecificKind, TypeKind,
};

// =============================================================================
// NAME SETS (unordered — construction order must not matter)
// =============================================================================

#[test]
fn returns_all_types_and_namespaces() {
    let mut builder = SnapshotBuilder::new();
    let unit = builder.begin_unit("a");
    let foo = builder.namespace("Foo", unit);
    builder.add_type(foo, "Blue", TypeKind::Class, unit);
    let green = builder.add_type(foo, "Green", TypeKind::Class, unit);
    builder.add_nested_type(green, "Red", TypeKind::Class, unit);
    builder.add_type(foo, "Yellow", TypeKind::Struct, unit);
    builder.add_type(foo, "Orange", TypeKind::Enum, unit);
    let graph = build(&builder.finish());

    assert_unordered_eq(
        graph.documents().map(|n| n.name()).collect(),
        &["", "Foo", "Blue", "Green", "Red", "Yellow", "Orange"],
    );
    assert_eq!(graph.document_count(), 7);
}

#[test]
fn full_name_contains_containing_type_but_never_namespaces() {
    let graph = build(&color_types_snapshot());
    assert_unordered_eq(
        graph.documents().map(|n| n.full_name()).collect(),
        &["", "Foo", "Green", "Green.Blue", "Red", "Yellow", "Bar"],
    );
}

#[test]
fn display_name_is_full_name_for_types_and_path_for_namespaces() {
    let graph = build(&color_types_snapshot());
    assert_unordered_eq(
        graph.documents().map(|n| n.display_name()).collect(),
        &[
            "global",
            "Foo",
            "Green",
            "Green.Blue",
            "Red",
            "Yellow",
            "Foo.Bar",
        ],
    );
}

#[test]
fn qualified_name_contains_namespace_and_containing_type() {
    let graph = build(&color_types_snapshot());
    assert_unordered_eq(
        graph.documents().map(|n| n.qualified_name()).collect(),
        &[
            "",
            "Foo",
            "Foo.Green",
            "Foo.Green.Blue",
            "Foo.Red",
            "Foo.Bar.Yellow",
            "Foo.Bar",
        ],
    );
}

// =============================================================================
// KIND TAGS
// =============================================================================

#[test]
fn kind_is_named_type_for_every_type() {
    let graph = build(&color_types_snapshot());
    for name in ["Green", "Blue", "Red", "Yellow"] {
        assert_eq!(get(&graph, name).kind(), NodeKind::NamedType);
    }
}

#[test]
fn specific_kind_matches_declared_category() {
    let graph = build(&color_types_snapshot());
    assert_eq!(get(&graph, "Green").specific_kind(), SpecificKind::Class);
    assert_eq!(get(&graph, "Blue").specific_kind(), SpecificKind::Class);
    assert_eq!(get(&graph, "Red").specific_kind(), SpecificKind::Struct);
    assert_eq!(get(&graph, "Yellow").specific_kind(), SpecificKind::Enum);
    assert_eq!(get(&graph, "Foo").kind(), NodeKind::Namespace);
}

#[test]
fn kind_tags_render_as_metadata_strings() {
    let graph = build(&color_types_snapshot());
    assert_eq!(get(&graph, "Green").kind().as_str(), "NamedType");
    assert_eq!(get(&graph, "Foo").kind().as_str(), "Namespace");
    assert_eq!(get(&graph, "Foo").specific_kind().as_str(), "Namespace");
    assert_eq!(get(&graph, "Green").specific_kind().as_str(), "Class");
    assert_eq!(get(&graph, "Red").specific_kind().as_str(), "Struct");
    assert_eq!(get(&graph, "Yellow").specific_kind().as_str(), "Enum");
}

#[test]
fn member_and_remaining_type_tags_render_as_metadata_strings() {
    let mut builder = SnapshotBuilder::new();
    let unit = builder.begin_unit("a");
    let foo = builder.namespace("Foo", unit);
    builder.add_type(foo, "IThing", TypeKind::Interface, unit);
    builder.add_type(foo, "Handler", TypeKind::Delegate, unit);
    let blue = builder.add_type(foo, "Blue", TypeKind::Class, unit);
    builder.add_member(blue, "Run", MemberKind::Method, false, unit);
    builder.add_member(blue, "Size", MemberKind::Property, false, unit);
    builder.add_member(blue, "_count", MemberKind::Field, false, unit);
    builder.add_member(blue, "Changed", MemberKind::Event, false, unit);
    let graph = build(&builder.finish());

    assert_eq!(get(&graph, "IThing").specific_kind().as_str(), "Interface");
    assert_eq!(get(&graph, "Handler").specific_kind().as_str(), "Delegate");
    assert_eq!(get(&graph, "Run").kind().as_str(), "Member");
    assert_eq!(get(&graph, "Run").specific_kind().as_str(), "Method");
    assert_eq!(get(&graph, "Size").specific_kind().as_str(), "Property");
    assert_eq!(get(&graph, "_count").specific_kind().as_str(), "Field");
    assert_eq!(get(&graph, "Changed").specific_kind().as_str(), "Event");
}

// =============================================================================
// MEMBER IDENTITY
// =============================================================================

#[test]
fn member_identity_chains_through_the_containing_type() {
    let mut builder = SnapshotBuilder::new();
    let unit = builder.begin_unit("a");
    let foo = builder.namespace("Foo", unit);
    let blue = builder.add_type(foo, "Blue", TypeKind::Class, unit);
    builder.add_member(blue, "Green", MemberKind::Method, false, unit);
    let graph = build(&builder.finish());

    let member = get(&graph, "Green");
    assert_eq!(member.kind(), NodeKind::Member);
    assert_eq!(member.specific_kind(), SpecificKind::Method);
    assert_eq!(member.full_name(), "Blue.Green");
    assert_eq!(member.qualified_name(), "Foo.Blue.Green");
    assert_eq!(member.display_name(), "Blue.Green");
}

#[test]
fn global_namespace_has_empty_name_and_global_display_name() {
    let graph = build(&color_types_snapshot());
    let root = get(&graph, "");
    assert_eq!(root.kind(), NodeKind::Namespace);
    assert_eq!(root.display_name(), "global");
    assert_eq!(root.qualified_name(), "");
    assert!(root.containing_namespace().is_none());
}

// =============================================================================
// CLASSIFICATION ERRORS
// =============================================================================

#[test]
fn unsupported_type_category_is_a_classification_error() {
    let mut builder = SnapshotBuilder::new();
    let unit = builder.begin_unit("a");
    let foo = builder.namespace("Foo", unit);
    builder.add_type(foo, "Weird", TypeKind::Other("record".into()), unit);
    let result = DocumentGraph::build(&builder.finish());

    match result {
        Err(GraphError::UnsupportedSymbol { name, category }) => {
            assert_eq!(name, "Weird");
            assert_eq!(category, "record");
        }
        other => panic!("expected UnsupportedSymbol, got {other:?}"),
    }
}

#[test]
fn unsupported_member_category_is_a_classification_error() {
    let mut builder = SnapshotBuilder::new();
    let unit = builder.begin_unit("a");
    let foo = builder.namespace("Foo", unit);
    let blue = builder.add_type(foo, "Blue", TypeKind::Class, unit);
    builder.add_member(blue, "Odd", MemberKind::Other("operator".into()), false, unit);
    let result = DocumentGraph::build(&builder.finish());

    assert!(matches!(
        result,
        Err(GraphError::UnsupportedSymbol { .. })
    ));
}
