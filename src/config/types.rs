use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pokeapi: PokeApiConfig,
    pub deepseek: DeepseekConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokeApiConfig {
    #[serde(default = "default_pokeapi_base_url")]
    pub base_url: String,
    /// Forwarded to the upstream as a `Cache-Control: max-age` hint.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepseekConfig {
    #[serde(default = "default_deepseek_base_url")]
    pub base_url: String,
    /// May be left empty in the file and supplied via DEEPSEEK_API_KEY.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_deepseek_model")]
    pub model: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_pokeapi_base_url(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_pokeapi_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    50
}

fn default_deepseek_base_url() -> String {
    "https://api.deepseek.com".to_string()
}

fn default_deepseek_model() -> String {
    "deepseek-chat".to_string()
}
