mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;

    // The environment always wins over the file for the credential.
    if let Ok(key) = env::var("DEEPSEEK_API_KEY") {
        config.deepseek.api_key = key;
    }

    if config.deepseek.api_key.is_empty() {
        return Err(Error::config(
            "DeepSeek API key missing: set deepseek.api_key or DEEPSEEK_API_KEY",
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn minimal_config_applies_defaults() {
        let config: Config = serde_yaml::from_str("deepseek:\n  api_key: sk-test\n").unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.pokeapi.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.pokeapi.cache_ttl_secs, 50);
        assert_eq!(config.deepseek.base_url, "https://api.deepseek.com");
        assert_eq!(config.deepseek.model, "deepseek-chat");
        assert_eq!(config.deepseek.api_key, "sk-test");
    }

    #[test]
    fn full_config_overrides_defaults() {
        let yaml = r#"
server:
  host: 127.0.0.1
  port: 9090
  logs:
    level: debug
pokeapi:
  base_url: http://localhost:1234
  cache_ttl_secs: 10
deepseek:
  base_url: http://localhost:5678
  api_key: sk-local
  model: deepseek-reasoner
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.logs.level, "debug");
        assert_eq!(config.pokeapi.cache_ttl_secs, 10);
        assert_eq!(config.deepseek.model, "deepseek-reasoner");
    }
}
