use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{ItemId, RecommendationEntry, UserProfile};
use crate::services::{ProfileBuilder, Recommender};

use super::AppState;

/// Default number of recommendations returned
const DEFAULT_LIMIT: usize = 15;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub limit: Option<usize>,
}

/// A ranked recommendation joined with catalog metadata
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub item_id: ItemId,
    pub score: u32,
    pub name: Option<String>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
}

impl RecommendationResponse {
    fn from_entry(entry: &RecommendationEntry, state: &AppState) -> Self {
        let catalog_entry = state.catalog.get(entry.item_id);
        Self {
            item_id: entry.item_id,
            score: entry.score,
            name: catalog_entry.map(|e| e.name.clone()),
            genres: catalog_entry.map(|e| e.genres.clone()).unwrap_or_default(),
            tags: catalog_entry.map(|e| e.tags.clone()).unwrap_or_default(),
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Builds and returns the user's preference profile
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<UserProfile>> {
    let interactions = state.provider.fetch_interactions(&user_id).await?;
    let profile = ProfileBuilder::new().build(&interactions, &state.catalog);
    Ok(Json(profile))
}

/// Runs the recommendation pipeline for a user
///
/// An empty result is a valid outcome (empty library, private profile, or
/// nothing in the graph matched), returned as an empty list.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<RecommendationParams>,
) -> AppResult<Json<Vec<RecommendationResponse>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    let interactions = state.provider.fetch_interactions(&user_id).await?;
    let profile = ProfileBuilder::new().build(&interactions, &state.catalog);

    let recommender = Recommender::new(Arc::clone(&state.graph));
    let entries = recommender.recommend(&profile).await;

    let response: Vec<RecommendationResponse> = entries
        .iter()
        .take(limit)
        .map(|entry| RecommendationResponse::from_entry(entry, &state))
        .collect();

    tracing::info!(
        user_id = %user_id,
        returned = response.len(),
        "Recommendations served"
    );

    Ok(Json(response))
}
