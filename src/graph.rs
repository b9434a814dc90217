use std::fmt::Write;

use crate::history::CommitRecord;

/// Render commit records as a Graphviz directed graph, one edge statement
/// per parent → child relationship.
///
/// Edges follow the input record order, then each record's own parent order,
/// so identical input always yields byte-identical output. Identifiers are
/// quoted verbatim with no escaping. Commits without parents contribute no
/// edges, so a root commit only shows up when it is some other commit's
/// parent.
pub fn render(records: &[CommitRecord]) -> String {
    let mut out = String::from("digraph G {\n");
    for record in records {
        for parent in &record.parents {
            writeln!(out, "    \"{}\" -> \"{}\";", parent, record.id).unwrap();
        }
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
