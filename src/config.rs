use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Steam Web API key for the ownership endpoint
    pub steam_api_key: String,

    /// Steam Web API base URL
    #[serde(default = "default_steam_api_url")]
    pub steam_api_url: String,

    /// Path to the game catalog CSV file
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Namespace root under which all graph node IRIs are minted.
    /// Shared by the graph builder and the query planner.
    #[serde(default = "default_graph_namespace")]
    pub graph_namespace: String,

    /// Redis connection URL
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_steam_api_url() -> String {
    "https://api.steampowered.com".to_string()
}

fn default_catalog_path() -> String {
    "data/game_catalog.csv".to_string()
}

fn default_graph_namespace() -> String {
    "http://gamescout.local/kb#".to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
