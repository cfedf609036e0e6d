use std::collections::HashMap;

use crate::graph::builder::release_year;
use crate::models::{InteractionRecord, UserProfile};
use crate::services::catalog::Catalog;

/// Minimum playtime for a game to count as liked
pub const LIKED_HOURS_MIN: f64 = 8.0;

/// Maximum playtime below which the external classifier labels a game
/// not-liked. The profile builder does not apply this bound; it is kept
/// here so both halves of the labeling convention live in one place.
pub const NOT_LIKED_HOURS_MAX: f64 = 1.0;

const MAX_TAGS: usize = 5;
const MAX_GENRES: usize = 3;
const MAX_PUBLISHERS: usize = 3;
const MAX_YEARS: usize = 2;

/// Builds a user's preference profile from their interaction history.
///
/// Liked games are those played at least `liked_hours_min` hours. Their
/// catalog attributes are exploded and ranked by frequency; the liked id
/// set is taken from the interactions alone, so games missing from the
/// catalog still count as seen.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    liked_hours_min: f64,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self {
            liked_hours_min: LIKED_HOURS_MIN,
        }
    }
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the liked-playtime threshold
    pub fn with_liked_hours_min(mut self, hours: f64) -> Self {
        self.liked_hours_min = hours;
        self
    }

    pub fn build(&self, interactions: &[InteractionRecord], catalog: &Catalog) -> UserProfile {
        let liked: Vec<&InteractionRecord> = interactions
            .iter()
            .filter(|r| r.hours_played >= self.liked_hours_min)
            .collect();

        let liked_item_ids = liked.iter().map(|r| r.item_id).collect();

        // Left-join with the catalog: unmatched games drop out of the
        // attribute rankings only
        let mut tags = Vec::new();
        let mut genres = Vec::new();
        let mut publishers = Vec::new();
        let mut years = Vec::new();

        for record in &liked {
            let Some(entry) = catalog.get(record.item_id) else {
                continue;
            };

            tags.extend(entry.tags.iter().cloned());
            genres.extend(entry.genres.iter().cloned());
            publishers.extend(entry.publishers.iter().cloned());

            if let Some(year) = entry.release_date.as_deref().and_then(release_year) {
                years.push(year.to_string());
            }
        }

        let profile = UserProfile {
            top_tags: rank_top(tags, MAX_TAGS),
            top_genres: rank_top(genres, MAX_GENRES),
            top_publishers: rank_top(publishers, MAX_PUBLISHERS),
            top_years: rank_top(years, MAX_YEARS),
            liked_item_ids,
        };

        tracing::debug!(
            liked = liked.len(),
            tags = profile.top_tags.len(),
            genres = profile.top_genres.len(),
            publishers = profile.top_publishers.len(),
            years = profile.top_years.len(),
            "User profile built"
        );

        profile
    }
}

/// Ranks values by occurrence count, descending; ties keep first-seen
/// order. Returns at most `limit` values.
fn rank_top(values: Vec<String>, limit: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for value in values {
        match positions.get(&value) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(limit).map(|(v, _)| v).collect()
}
