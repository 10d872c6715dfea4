use std::fmt::Write;

pub const KITCHEN_SINK: &str = include_str!("kitchen_sink.graphql");
pub const INTROSPECTION_QUERY: &str = include_str!("introspection_query.graphql");
pub const MIXED_DOCUMENT: &str = include_str!("mixed_document.graphql");
pub const SELECTION_SET: &str = include_str!("selection_set.graphql");
pub const STARWARS_SCHEMA: &str = include_str!("starwars_schema.graphql");

/// Generates a query whose selection sets nest `depth` levels deep.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let name = if level == 0 { "root" } else { "child" };
        let _ = writeln!(out, "{indent}{name} {{");
        let _ = writeln!(out, "{indent}  id");
    }
    let _ = writeln!(out, "{}name", "  ".repeat(depth + 1));
    for level in (0..depth).rev() {
        let _ = writeln!(out, "{}}}", "  ".repeat(level + 1));
    }
    out.push_str("}\n");
    out
}

/// Generates a document of `count` small named queries.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        let _ = writeln!(
            out,
            "query Operation{i}($id: ID!) {{\n  node(id: $id) {{\n    id\n    field{i}: description\n  }}\n}}\n",
        );
    }
    out
}
