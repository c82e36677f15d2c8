use anyhow::{Context, Result};
use archivum_engine::{MAP_EXPORT_FILENAME, build_graph, to_dot};
use archivum_store::Archive;
use std::path::Path;

pub fn handle_export(archive: &Archive, out: Option<&Path>) -> Result<()> {
    let links = archive
        .links()
        .iter()
        .map(|link| (link.from.as_str(), link.to.as_str()));
    let graph = build_graph(archive.records(), links);
    let dot = to_dot(&graph);

    let path = out.unwrap_or_else(|| Path::new(MAP_EXPORT_FILENAME));
    std::fs::write(path, dot)
        .with_context(|| format!("Failed to write map export: {}", path.display()))?;

    println!(
        "Wrote {} ({} nodes, {} edges)",
        path.display(),
        graph.nodes.len(),
        graph.edges.len()
    );
    Ok(())
}
