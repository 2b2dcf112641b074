//! Write path generator — deterministic output locations for named types.
//!
//! Paths have the shape `<namespace-path>/<disambiguator>/index.html`, with
//! the namespace's dots replaced by the platform path separator and
//! global-namespace types placing the disambiguator at the path root. The
//! disambiguator is a fixed-width hash of the type's qualified name: same
//! type, same path, run after run.

use std::hash::Hasher;

use rustc_hash::{FxHashMap, FxHasher};

use crate::error::GraphError;

use super::node::{DocumentNode, NodeKind};

/// Assign a write path to every snapshot-resident named type.
///
/// A collision between two distinct types is fatal: silently overwriting
/// one type's output is worse than failing the build.
pub(crate) fn assign(nodes: &mut [DocumentNode]) -> Result<(), GraphError> {
    let mut assigned: Vec<(usize, String)> = Vec::new();
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();

    for (index, node) in nodes.iter().enumerate() {
        if node.kind != NodeKind::NamedType || node.external {
            continue;
        }
        let namespace_path = node
            .containing_namespace
            .map(|ns| nodes[ns.index()].qualified_name.as_str())
            .unwrap_or("");
        let path = render(namespace_path, &disambiguator(&node.qualified_name));
        if let Some(previous) = seen.insert(path.clone(), index) {
            return Err(GraphError::WritePathCollision {
                path,
                first: nodes[previous].qualified_name.to_string(),
                second: node.qualified_name.to_string(),
            });
        }
        assigned.push((index, path));
    }

    for (index, path) in assigned {
        nodes[index].write_path = Some(path);
    }
    Ok(())
}

/// Fold a seed-free 64-bit hash of the qualified name down to 8 uppercase
/// hex digits. FxHasher carries no per-process randomness, so the token is
/// identical across runs and processes.
pub(crate) fn disambiguator(qualified_name: &str) -> String {
    let mut hasher = FxHasher::default();
    hasher.write(qualified_name.as_bytes());
    let hash = hasher.finish();
    format!("{:08X}", (hash as u32) ^ ((hash >> 32) as u32))
}

fn render(namespace_path: &str, token: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    let mut out = String::with_capacity(namespace_path.len() + token.len() + 12);
    if !namespace_path.is_empty() {
        for segment in namespace_path.split('.') {
            out.push_str(segment);
            out.push(sep);
        }
    }
    out.push_str(token);
    out.push(sep);
    out.push_str("index.html");
    out
}

#[cfg(test)]
mod tests {
    use smol_str::SmolStr;

    use super::*;
    use crate::base::NodeId;
    use crate::graph::identity::Identity;
    use crate::graph::SpecificKind;

    fn resident_type(index: usize, qualified_name: &str) -> DocumentNode {
        let name = qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(qualified_name);
        DocumentNode::resident(
            NodeId::new(index),
            Identity {
                name: SmolStr::new(name),
                full_name: SmolStr::new(name),
                qualified_name: SmolStr::new(qualified_name),
                display_name: SmolStr::new(name),
                kind: NodeKind::NamedType,
                specific_kind: SpecificKind::Class,
            },
        )
    }

    #[test]
    fn colliding_output_locations_fail_the_build() {
        // The token depends only on the qualified name, so two nodes that
        // carry the same one (a front-end double-registering a type is the
        // degenerate case) are guaranteed to land on the same location
        let mut nodes = vec![
            resident_type(0, "Foo.Dup"),
            resident_type(1, "Foo.Dup"),
        ];
        match assign(&mut nodes) {
            Err(GraphError::WritePathCollision {
                path,
                first,
                second,
            }) => {
                assert!(path.ends_with("index.html"));
                assert_eq!(first, "Foo.Dup");
                assert_eq!(second, "Foo.Dup");
            }
            other => panic!("expected WritePathCollision, got {other:?}"),
        }
    }

    #[test]
    fn distinct_locations_assign_cleanly() {
        let mut nodes = vec![
            resident_type(0, "Foo.Red"),
            resident_type(1, "Foo.Green"),
        ];
        assert!(assign(&mut nodes).is_ok());
        assert_ne!(nodes[0].write_path, nodes[1].write_path);
        assert!(nodes[0].write_path.is_some());
    }

    #[test]
    fn disambiguator_is_deterministic() {
        assert_eq!(disambiguator("Foo.Red"), disambiguator("Foo.Red"));
    }

    #[test]
    fn disambiguator_is_eight_uppercase_hex_digits() {
        let token = disambiguator("Foo.Bar.Blue");
        assert_eq!(token.len(), 8);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(token, token.to_uppercase());
    }

    #[test]
    fn distinct_qualified_names_get_distinct_tokens() {
        assert_ne!(disambiguator("Foo.Red"), disambiguator("Bar.Red"));
        assert_ne!(disambiguator("Foo.Red"), disambiguator("Foo.Green"));
    }

    #[test]
    fn render_replaces_dots_with_the_path_separator() {
        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(
            render("Foo.Bar", "92C5B5C5"),
            format!("Foo{sep}Bar{sep}92C5B5C5{sep}index.html")
        );
        assert_eq!(render("", "439037DE"), format!("439037DE{sep}index.html"));
    }
}
