/// Steam Web API provider
///
/// Fetches a user's owned games from IPlayerService/GetOwnedGames and
/// converts them into interaction records (playtime minutes → hours).
/// Responses are cached in Redis so repeated recommendation runs for the
/// same user do not hammer the upstream API.
use chrono::Utc;
use reqwest::Client as HttpClient;

use crate::{
    cached,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::{InteractionRecord, LibrarySnapshot, OwnedGamesResponse},
    services::providers::InteractionProvider,
};

const OWNED_GAMES_CACHE_TTL: u64 = 21600; // 6 hours

#[derive(Clone)]
pub struct SteamProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    cache: Cache,
}

impl SteamProvider {
    pub fn new(cache: Cache, api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            cache,
        }
    }

    /// Calls the owned-games endpoint
    async fn call_api(&self, user_id: &str) -> AppResult<Vec<InteractionRecord>> {
        let url = format!("{}/IPlayerService/GetOwnedGames/v1/", self.api_url);

        tracing::debug!(user_id = %user_id, "Fetching owned games from Steam API");

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("steamid", user_id),
                ("include_appinfo", "true"),
                ("include_played_free_games", "true"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                user_id = %user_id,
                status = %status,
                body = %body,
                "Steam API request failed"
            );
            return Err(AppError::ExternalApi(format!(
                "Steam API returned status {}: {}",
                status, body
            )));
        }

        let owned: OwnedGamesResponse = response.json().await?;

        let records: Vec<InteractionRecord> = match owned.response.games {
            Some(games) => games.into_iter().map(InteractionRecord::from).collect(),
            None => {
                tracing::warn!(user_id = %user_id, "No games in response, profile may be private");
                Vec::new()
            }
        };

        tracing::info!(
            user_id = %user_id,
            games = records.len(),
            provider = "steam",
            "Owned games fetched"
        );

        Ok(records)
    }
}

impl SteamProvider {
    /// Read-through cached snapshot of the user's library
    async fn fetch_snapshot(&self, user_id: &str) -> AppResult<LibrarySnapshot> {
        cached!(
            self.cache,
            CacheKey::OwnedGames(user_id.to_string()),
            OWNED_GAMES_CACHE_TTL,
            async move {
                let records = self.call_api(user_id).await?;
                Ok::<_, AppError>(LibrarySnapshot {
                    user_id: user_id.to_string(),
                    records,
                    fetched_at: Utc::now(),
                })
            }
        )
    }
}

#[async_trait::async_trait]
impl InteractionProvider for SteamProvider {
    async fn fetch_interactions(&self, user_id: &str) -> AppResult<Vec<InteractionRecord>> {
        if user_id.trim().is_empty() {
            return Err(AppError::InvalidInput("User ID cannot be empty".to_string()));
        }

        let snapshot = self.fetch_snapshot(user_id).await?;
        Ok(snapshot.records)
    }

    fn name(&self) -> &'static str {
        "steam"
    }
}
