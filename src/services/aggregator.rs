use std::collections::{HashMap, HashSet};

use crate::models::{ItemId, RecommendationEntry};

/// Merges per-pattern result sets into one ranked list.
///
/// Each result set contributes at most one vote per item, so an item's
/// score is the number of distinct preference signals that matched it.
/// Items in `excluded` (the user's liked games) never appear. The output
/// is sorted by score descending; equal scores keep the order in which
/// items were first encountered while scanning the sets in planner order.
pub fn aggregate(
    result_sets: &[Vec<ItemId>],
    excluded: &HashSet<ItemId>,
) -> Vec<RecommendationEntry> {
    let mut first_seen: Vec<ItemId> = Vec::new();
    let mut scores: HashMap<ItemId, u32> = HashMap::new();

    for set in result_sets {
        let mut voted: HashSet<ItemId> = HashSet::new();

        for &item_id in set {
            if excluded.contains(&item_id) || !voted.insert(item_id) {
                continue;
            }

            match scores.get_mut(&item_id) {
                Some(score) => *score += 1,
                None => {
                    scores.insert(item_id, 1);
                    first_seen.push(item_id);
                }
            }
        }
    }

    let mut entries: Vec<RecommendationEntry> = first_seen
        .into_iter()
        .map(|item_id| RecommendationEntry {
            item_id,
            score: scores[&item_id],
        })
        .collect();

    // Stable sort: ties keep first-encountered order
    entries.sort_by(|a, b| b.score.cmp(&a.score));

    entries
}
