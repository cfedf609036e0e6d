use std::fmt::Display;

use crate::graph::ident::normalize;
use crate::graph::{EdgeKind, NodeKind, Object};
use crate::models::UserProfile;

/// The preference signal a pattern was generated from, kept for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceSignal {
    Tag(String),
    Genre(String),
    Publisher(String),
    ReleaseYear(String),
}

impl Display for PreferenceSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceSignal::Tag(v) => write!(f, "tag:{}", v),
            PreferenceSignal::Genre(v) => write!(f, "genre:{}", v),
            PreferenceSignal::Publisher(v) => write!(f, "publisher:{}", v),
            PreferenceSignal::ReleaseYear(v) => write!(f, "year:{}", v),
        }
    }
}

/// A single graph constraint: the candidate item is bound through exactly
/// one edge to one object. Objects are bound values, never text spliced
/// into query syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPattern {
    pub signal: PreferenceSignal,
    pub edge: EdgeKind,
    pub object: Object,
}

/// Plans one graph pattern per profile value.
///
/// Families are emitted in profile order (tags, genres, publishers, years),
/// each in its own rank order; that ordering is what downstream tie-breaks
/// are defined against. Tag, genre, and publisher values go through the
/// identifier normalizer; year literals are matched verbatim. Values that
/// normalize to an empty identifier are skipped, not submitted.
pub fn plan_queries(profile: &UserProfile) -> Vec<GraphPattern> {
    let mut patterns = Vec::new();

    for tag in &profile.top_tags {
        push_node_pattern(
            &mut patterns,
            PreferenceSignal::Tag(tag.clone()),
            EdgeKind::HasTag,
            NodeKind::Tag,
            tag,
        );
    }

    for genre in &profile.top_genres {
        push_node_pattern(
            &mut patterns,
            PreferenceSignal::Genre(genre.clone()),
            EdgeKind::HasGenre,
            NodeKind::Genre,
            genre,
        );
    }

    for publisher in &profile.top_publishers {
        push_node_pattern(
            &mut patterns,
            PreferenceSignal::Publisher(publisher.clone()),
            EdgeKind::PublishedBy,
            NodeKind::Publisher,
            publisher,
        );
    }

    for year in &profile.top_years {
        if year.is_empty() {
            continue;
        }
        patterns.push(GraphPattern {
            signal: PreferenceSignal::ReleaseYear(year.clone()),
            edge: EdgeKind::ReleaseDate,
            object: Object::Literal(year.clone()),
        });
    }

    tracing::debug!(patterns = patterns.len(), "Query plan generated");

    patterns
}

fn push_node_pattern(
    patterns: &mut Vec<GraphPattern>,
    signal: PreferenceSignal,
    edge: EdgeKind,
    kind: NodeKind,
    text: &str,
) {
    let ident = normalize(text);
    if ident.is_empty() {
        tracing::warn!(signal = %signal, "Skipping pattern with empty identifier");
        return;
    }

    patterns.push(GraphPattern {
        signal,
        edge,
        object: Object::Node(kind, ident),
    });
}
