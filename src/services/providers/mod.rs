/// Interaction source abstraction
///
/// The recommendation core is agnostic to where play history comes from;
/// providers supply interaction records from a live API, a cache, or a
/// test fixture.
use crate::{error::AppResult, models::InteractionRecord};

pub mod steam;

/// Trait for interaction sources
#[async_trait::async_trait]
pub trait InteractionProvider: Send + Sync {
    /// Fetches a user's interaction records
    ///
    /// An empty library (or a private profile) is a valid empty result,
    /// not an error.
    async fn fetch_interactions(&self, user_id: &str) -> AppResult<Vec<InteractionRecord>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
