use archivum_types::{Record, RecordKind};
use serde::Serialize;

/// Default filename for map export.
pub const MAP_EXPORT_FILENAME: &str = "relationship-map.dot";

/// One map node: label from the record name, tooltip from its summary,
/// color keyed by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub tooltip: String,
    pub color: &'static str,
}

/// A directed edge between two resolved record ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Map node color per record kind.
pub fn kind_color(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Person => "#DAA520",
        RecordKind::Movement => "#B22222",
        RecordKind::Event => "#CD5C5C",
        RecordKind::Resource => "#4682B4",
        RecordKind::Unknown => "#777777",
    }
}

/// Build the relationship map from the full dataset and its resolved
/// links. A "reset" is simply calling this again: the prior graph is
/// discarded wholesale.
pub fn build_graph<'a, I>(records: &[Record], links: I) -> Graph
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let nodes = records
        .iter()
        .map(|record| GraphNode {
            id: record.id.clone(),
            label: record.name.clone(),
            tooltip: record.summary.clone(),
            color: kind_color(record.kind),
        })
        .collect();

    let edges = links
        .into_iter()
        .map(|(from, to)| GraphEdge {
            from: from.to_string(),
            to: to.to_string(),
        })
        .collect();

    Graph { nodes, edges }
}

/// Serialize the graph as Graphviz DOT. Layout and rasterization are
/// delegated to external tooling.
pub fn to_dot(graph: &Graph) -> String {
    let mut out = String::from("digraph archive {\n");
    out.push_str("    rankdir=LR;\n");
    out.push_str("    node [shape=box, style=filled, fontcolor=\"#1e1e1e\"];\n");

    for node in &graph.nodes {
        out.push_str(&format!(
            "    \"{}\" [label=\"{}\", tooltip=\"{}\", fillcolor=\"{}\"];\n",
            escape(&node.id),
            escape(&node.label),
            escape(&node.tooltip),
            node.color,
        ));
    }

    for edge in &graph.edges {
        out.push_str(&format!(
            "    \"{}\" -> \"{}\";\n",
            escape(&edge.from),
            escape(&edge.to)
        ));
    }

    out.push_str("}\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
