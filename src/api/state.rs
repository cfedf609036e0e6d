use std::sync::Arc;

use crate::graph::KnowledgeGraph;
use crate::services::catalog::Catalog;
use crate::services::providers::InteractionProvider;

/// Shared application state
///
/// The graph and catalog are loaded once at startup and shared read-only
/// for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<KnowledgeGraph>,
    pub catalog: Arc<Catalog>,
    pub provider: Arc<dyn InteractionProvider>,
}

impl AppState {
    pub fn new(
        graph: Arc<KnowledgeGraph>,
        catalog: Arc<Catalog>,
        provider: Arc<dyn InteractionProvider>,
    ) -> Self {
        Self {
            graph,
            catalog,
            provider,
        }
    }
}
