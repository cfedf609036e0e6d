use std::sync::Arc;

use crate::graph::KnowledgeGraph;
use crate::models::{ItemId, RecommendationEntry, UserProfile};
use crate::services::aggregator::aggregate;
use crate::services::executor::execute;
use crate::services::planner::plan_queries;

/// Runs the recommendation pipeline: plan the profile's graph patterns,
/// execute them against the graph snapshot, and aggregate the votes.
pub struct Recommender {
    graph: Arc<KnowledgeGraph>,
}

impl Recommender {
    pub fn new(graph: Arc<KnowledgeGraph>) -> Self {
        Self { graph }
    }

    /// Produces the ranked recommendation list for a profile.
    ///
    /// Patterns are independent read-only lookups, so they fan out as
    /// parallel tasks; results are reassembled by planned index, never
    /// completion order, because aggregation tie-breaks are defined
    /// against the planner's ordering. A failed task is logged and
    /// contributes zero matches.
    pub async fn recommend(&self, profile: &UserProfile) -> Vec<RecommendationEntry> {
        let patterns = plan_queries(profile);
        if patterns.is_empty() {
            tracing::info!("Empty query plan, no recommendations");
            return Vec::new();
        }

        let mut tasks = Vec::new();

        for (idx, pattern) in patterns.into_iter().enumerate() {
            let graph = Arc::clone(&self.graph);
            let task = tokio::spawn(async move { (idx, execute(&graph, &pattern)) });
            tasks.push(task);
        }

        let mut result_sets: Vec<Vec<ItemId>> = vec![Vec::new(); tasks.len()];

        for task in tasks {
            match task.await {
                Ok((idx, matches)) => result_sets[idx] = matches,
                Err(e) => {
                    tracing::warn!(error = %e, "Pattern task failed, counting zero matches");
                }
            }
        }

        let entries = aggregate(&result_sets, &profile.liked_item_ids);

        tracing::info!(
            patterns = result_sets.len(),
            candidates = entries.len(),
            "Recommendations aggregated"
        );

        entries
    }
}
