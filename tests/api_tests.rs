use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;

use gamescout::api::{create_router, AppState};
use gamescout::error::AppResult;
use gamescout::graph::build_graph;
use gamescout::models::{CatalogEntry, InteractionRecord, ItemId};
use gamescout::services::catalog::Catalog;
use gamescout::services::providers::InteractionProvider;

/// Provider backed by a fixed list of interactions
struct StubProvider {
    records: Vec<InteractionRecord>,
}

#[async_trait::async_trait]
impl InteractionProvider for StubProvider {
    async fn fetch_interactions(&self, _user_id: &str) -> AppResult<Vec<InteractionRecord>> {
        Ok(self.records.clone())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

fn entry(
    id: u64,
    name: &str,
    tags: &[&str],
    genres: &[&str],
    publisher: &str,
    date: &str,
) -> CatalogEntry {
    CatalogEntry {
        item_id: ItemId(id),
        name: name.to_string(),
        genres: genres.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        publishers: vec![publisher.to_string()],
        release_date: Some(date.to_string()),
    }
}

fn record(id: u64, name: &str, hours: f64) -> InteractionRecord {
    InteractionRecord {
        item_id: ItemId(id),
        name: name.to_string(),
        hours_played: hours,
    }
}

fn test_catalog() -> Catalog {
    Catalog::from_entries(vec![
        entry(1, "Darkwood Quest", &["RPG", "Fantasy"], &["Adventure"], "Moonlit", "10 Apr, 2015"),
        entry(2, "Iron Tactics", &["RPG", "Strategy"], &["Adventure"], "Moonlit", "3 Jun, 2015"),
        entry(3, "Block Puzzler", &["Puzzle"], &["Casual"], "Minimal", "1 Jan, 2010"),
        entry(4, "Star Drifter", &["RPG"], &["Adventure"], "Moonlit", "8 Sep, 2016"),
    ])
}

fn create_test_server(records: Vec<InteractionRecord>) -> TestServer {
    let catalog = Arc::new(test_catalog());
    let graph = Arc::new(build_graph(&catalog, "http://test.local/kb#"));
    let provider = Arc::new(StubProvider { records });

    let state = AppState::new(graph, catalog, provider);
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(Vec::new());
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_profile_endpoint() {
    let server = create_test_server(vec![
        record(1, "Darkwood Quest", 25.0),
        record(3, "Block Puzzler", 0.5),
    ]);

    let response = server.get("/users/42/profile").await;
    response.assert_status_ok();

    let profile: serde_json::Value = response.json();
    assert_eq!(profile["liked_item_ids"].as_array().unwrap().len(), 1);
    assert_eq!(profile["top_tags"][0], "RPG");
    assert_eq!(profile["top_genres"][0], "Adventure");
    assert_eq!(profile["top_years"][0], "2015");
}

#[tokio::test]
async fn test_recommendations_exclude_liked_games() {
    let server = create_test_server(vec![record(1, "Darkwood Quest", 25.0)]);

    let response = server.get("/users/42/recommendations").await;
    response.assert_status_ok();

    let recs: Vec<serde_json::Value> = response.json();
    assert!(!recs.is_empty());
    assert!(recs.iter().all(|r| r["item_id"] != 1));
}

#[tokio::test]
async fn test_recommendations_ranked_by_score() {
    let server = create_test_server(vec![record(1, "Darkwood Quest", 25.0)]);

    let response = server.get("/users/42/recommendations").await;
    response.assert_status_ok();

    let recs: Vec<serde_json::Value> = response.json();

    // Iron Tactics shares tag, genre, publisher, and year with the liked
    // game; Star Drifter shares tag, genre, and publisher only
    assert_eq!(recs[0]["item_id"], 2);
    assert_eq!(recs[0]["name"], "Iron Tactics");
    assert_eq!(recs[0]["score"], 4);
    assert_eq!(recs[1]["item_id"], 4);
    assert_eq!(recs[1]["score"], 3);

    let scores: Vec<u64> = recs.iter().map(|r| r["score"].as_u64().unwrap()).collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
}

#[tokio::test]
async fn test_recommendations_respect_limit() {
    let server = create_test_server(vec![record(1, "Darkwood Quest", 25.0)]);

    let response = server.get("/users/42/recommendations?limit=1").await;
    response.assert_status_ok();

    let recs: Vec<serde_json::Value> = response.json();
    assert_eq!(recs.len(), 1);
}

#[tokio::test]
async fn test_recommendations_empty_library() {
    let server = create_test_server(Vec::new());

    let response = server.get("/users/42/recommendations").await;
    response.assert_status_ok();

    let recs: Vec<serde_json::Value> = response.json();
    assert!(recs.is_empty());
}

#[tokio::test]
async fn test_response_carries_request_id_header() {
    let server = create_test_server(Vec::new());

    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_caller_request_id_is_echoed_back() {
    let server = create_test_server(Vec::new());

    let id = "0a54d1c6-43ab-4a12-9f64-2d5f86a58c3b";
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("0a54d1c6-43ab-4a12-9f64-2d5f86a58c3b"),
        )
        .await;

    assert_eq!(response.headers().get("x-request-id").unwrap(), id);
}
