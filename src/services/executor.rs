use crate::graph::{KnowledgeGraph, Object};
use crate::models::ItemId;
use crate::services::planner::GraphPattern;

/// Executes one graph pattern against the knowledge graph.
///
/// A pure read-only lookup: the matching items come back deduplicated and
/// in graph insertion order. Zero matches is a normal, silent outcome.
pub fn execute(graph: &KnowledgeGraph, pattern: &GraphPattern) -> Vec<ItemId> {
    let matches = graph.matching_items(pattern.edge, &pattern.object).to_vec();

    tracing::trace!(
        signal = %pattern.signal,
        target = %pattern_target(graph, &pattern.object),
        matches = matches.len(),
        "Pattern executed"
    );

    matches
}

/// Renders the object side of a pattern for the trace log: node targets as
/// full IRIs under the graph namespace, literals quoted
fn pattern_target(graph: &KnowledgeGraph, object: &Object) -> String {
    match object {
        Object::Node(_, ident) => graph.node_iri(ident),
        Object::Literal(value) => format!("\"{}\"", value),
    }
}
