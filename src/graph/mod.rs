use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::models::ItemId;

pub mod builder;
pub mod ident;

pub use builder::build_graph;

/// Node variants in the knowledge graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Item,
    Tag,
    Genre,
    Publisher,
}

/// Directed, typed relations between an item and its attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    HasTag,
    HasGenre,
    PublishedBy,
    ReleaseDate,
}

impl Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EdgeKind::HasTag => "hasTag",
            EdgeKind::HasGenre => "hasGenre",
            EdgeKind::PublishedBy => "publishedBy",
            EdgeKind::ReleaseDate => "releaseDate",
        };
        write!(f, "{}", name)
    }
}

/// The object side of an edge: an attribute node identified by its
/// normalized identifier, or a literal (the release year string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Object {
    Node(NodeKind, String),
    Literal(String),
}

/// In-memory knowledge graph: items and their typed attribute edges.
///
/// Edges are indexed by `(EdgeKind, Object)` so a graph pattern resolves to
/// its matching items with a single lookup. Per key, item lists preserve
/// insertion order and contain no duplicates, which keeps downstream
/// tie-breaking deterministic.
///
/// The graph is write-once: it is fully built at startup and shared
/// read-only for the process lifetime.
#[derive(Debug, Default)]
pub struct KnowledgeGraph {
    /// Namespace root under which node IRIs are minted
    namespace: String,
    items: HashSet<ItemId>,
    index: HashMap<(EdgeKind, Object), Vec<ItemId>>,
    seen: HashSet<(EdgeKind, Object, ItemId)>,
    edge_count: usize,
}

impl KnowledgeGraph {
    /// Creates an empty graph bound to the given namespace root
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// Registers an item node
    pub fn add_item(&mut self, item_id: ItemId) {
        self.items.insert(item_id);
    }

    /// Adds one `item --edge--> object` edge.
    ///
    /// Edges with an empty object identifier are rejected by the caller;
    /// duplicate edges are ignored.
    pub fn add_edge(&mut self, item_id: ItemId, edge: EdgeKind, object: Object) {
        let key = (edge, object.clone(), item_id);
        if !self.seen.insert(key) {
            return;
        }

        self.items.insert(item_id);
        self.index.entry((edge, object)).or_default().push(item_id);
        self.edge_count += 1;
    }

    /// Items connected to `object` via `edge`, in insertion order.
    /// An unknown key is a normal zero-match outcome.
    pub fn matching_items(&self, edge: EdgeKind, object: &Object) -> &[ItemId] {
        self.index
            .get(&(edge, object.clone()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Renders the full IRI of a node under the configured namespace
    pub fn node_iri(&self, ident: &str) -> String {
        format!("{}{}", self.namespace, ident)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(ident: &str) -> Object {
        Object::Node(NodeKind::Tag, ident.to_string())
    }

    #[test]
    fn test_add_edge_and_match() {
        let mut graph = KnowledgeGraph::new("http://test.local/kb#");
        graph.add_edge(ItemId(1), EdgeKind::HasTag, tag("RPG"));
        graph.add_edge(ItemId(2), EdgeKind::HasTag, tag("RPG"));
        graph.add_edge(ItemId(3), EdgeKind::HasTag, tag("Indie"));

        assert_eq!(
            graph.matching_items(EdgeKind::HasTag, &tag("RPG")),
            &[ItemId(1), ItemId(2)]
        );
        assert_eq!(
            graph.matching_items(EdgeKind::HasTag, &tag("Indie")),
            &[ItemId(3)]
        );
    }

    #[test]
    fn test_duplicate_edges_ignored() {
        let mut graph = KnowledgeGraph::new("http://test.local/kb#");
        graph.add_edge(ItemId(1), EdgeKind::HasTag, tag("RPG"));
        graph.add_edge(ItemId(1), EdgeKind::HasTag, tag("RPG"));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.matching_items(EdgeKind::HasTag, &tag("RPG")), &[ItemId(1)]);
    }

    #[test]
    fn test_unknown_key_is_zero_matches() {
        let graph = KnowledgeGraph::new("http://test.local/kb#");
        assert!(graph.matching_items(EdgeKind::HasGenre, &tag("Action")).is_empty());
    }

    #[test]
    fn test_same_ident_different_edge_kinds() {
        // "Action" as a tag and as a genre are distinct keys
        let mut graph = KnowledgeGraph::new("http://test.local/kb#");
        graph.add_edge(ItemId(1), EdgeKind::HasTag, tag("Action"));
        graph.add_edge(
            ItemId(2),
            EdgeKind::HasGenre,
            Object::Node(NodeKind::Genre, "Action".to_string()),
        );

        assert_eq!(graph.matching_items(EdgeKind::HasTag, &tag("Action")), &[ItemId(1)]);
        assert_eq!(
            graph.matching_items(
                EdgeKind::HasGenre,
                &Object::Node(NodeKind::Genre, "Action".to_string())
            ),
            &[ItemId(2)]
        );
    }

    #[test]
    fn test_literal_edges() {
        let mut graph = KnowledgeGraph::new("http://test.local/kb#");
        graph.add_edge(
            ItemId(1),
            EdgeKind::ReleaseDate,
            Object::Literal("2015".to_string()),
        );

        assert_eq!(
            graph.matching_items(EdgeKind::ReleaseDate, &Object::Literal("2015".to_string())),
            &[ItemId(1)]
        );
        assert!(graph
            .matching_items(EdgeKind::ReleaseDate, &Object::Literal("2016".to_string()))
            .is_empty());
    }

    #[test]
    fn test_node_iri() {
        let graph = KnowledgeGraph::new("http://test.local/kb#");
        assert_eq!(graph.node_iri("Role_Playing"), "http://test.local/kb#Role_Playing");
    }
}
