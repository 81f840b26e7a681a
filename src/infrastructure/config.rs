use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub store: StoreSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    pub url: String,
    pub api_key: String,
    pub series_table: String,
    pub requests_table: String,
    pub fetch_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen: String,
    #[serde(default)]
    pub redirect: Option<RedirectSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedirectSettings {
    pub apex_host: String,
    pub canonical_host: String,
}

pub fn load_store_config() -> anyhow::Result<StoreConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/store"))
        .build()
        .context("Failed to read config/store")?;

    settings
        .try_deserialize()
        .context("Failed to parse config/store")
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server"))
        .build()
        .context("Failed to read config/server")?;

    settings
        .try_deserialize()
        .context("Failed to parse config/server")
}
