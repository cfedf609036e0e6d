use crate::models::CatalogEntry;
use crate::services::catalog::Catalog;

use super::ident::normalize;
use super::{EdgeKind, KnowledgeGraph, NodeKind, Object};

/// Builds the knowledge graph from the game catalog.
///
/// Attribute nodes are identified by the normalized form of their display
/// text, using the same `normalize` the query planner uses; release dates
/// are reduced to their year string so year patterns match literally.
/// Attributes that normalize to an empty identifier are skipped.
pub fn build_graph(catalog: &Catalog, namespace: &str) -> KnowledgeGraph {
    let mut graph = KnowledgeGraph::new(namespace);

    for entry in catalog.entries() {
        graph.add_item(entry.item_id);

        for tag in &entry.tags {
            add_attribute(&mut graph, entry, EdgeKind::HasTag, NodeKind::Tag, tag);
        }

        for genre in &entry.genres {
            add_attribute(&mut graph, entry, EdgeKind::HasGenre, NodeKind::Genre, genre);
        }

        for publisher in &entry.publishers {
            add_attribute(
                &mut graph,
                entry,
                EdgeKind::PublishedBy,
                NodeKind::Publisher,
                publisher,
            );
        }

        if let Some(year) = entry.release_date.as_deref().and_then(release_year) {
            graph.add_edge(
                entry.item_id,
                EdgeKind::ReleaseDate,
                Object::Literal(year.to_string()),
            );
        }
    }

    tracing::info!(
        items = graph.item_count(),
        edges = graph.edge_count(),
        namespace = %graph.namespace(),
        "Knowledge graph built"
    );

    graph
}

fn add_attribute(
    graph: &mut KnowledgeGraph,
    entry: &CatalogEntry,
    edge: EdgeKind,
    kind: NodeKind,
    text: &str,
) {
    let ident = normalize(text);
    if ident.is_empty() {
        tracing::warn!(item_id = %entry.item_id, text = %text, "Skipping attribute with empty identifier");
        return;
    }

    graph.add_edge(entry.item_id, edge, Object::Node(kind, ident));
}

/// Extracts the year as the last 4 characters of a release date string
pub fn release_year(release_date: &str) -> Option<&str> {
    let trimmed = release_date.trim();
    if trimmed.len() < 4 {
        return None;
    }

    let (boundary, _) = trimmed.char_indices().nth_back(3)?;
    Some(&trimmed[boundary..])
}
