//! Configuration loader for Portico.
//!
//! Reads `config.toml` from `~/.portico/`, falling back to defaults when
//! the file is missing or malformed, then applies `PORTICO_*` environment
//! overrides. Absent datastore credentials are a recognized, non-fatal
//! state -- they disable the direct-datastore transport only.

use std::path::{Path, PathBuf};

use portico_types::config::PorticoConfig;

pub const ENV_API_URL: &str = "PORTICO_API_URL";
pub const ENV_DATASTORE_URL: &str = "PORTICO_DATASTORE_URL";
pub const ENV_DATASTORE_KEY: &str = "PORTICO_DATASTORE_KEY";
pub const ENV_UPSTREAM_API_URL: &str = "PORTICO_UPSTREAM_API_URL";
pub const ENV_NOTIFY_WEBHOOK_URL: &str = "PORTICO_NOTIFY_WEBHOOK_URL";

/// `~/.portico/config.toml`, when a home directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".portico").join("config.toml"))
}

/// Load the effective configuration: config file, then env overrides.
pub async fn load_config() -> PorticoConfig {
    let file_config = match default_config_path() {
        Some(path) => load_config_file(&path).await,
        None => PorticoConfig::default(),
    };
    apply_env_overrides(file_config, |name| std::env::var(name).ok())
}

/// Load configuration from a specific file.
///
/// - Missing file: returns [`PorticoConfig::default()`].
/// - Unreadable or unparseable file: logs a warning and returns the default.
pub async fn load_config_file(path: &Path) -> PorticoConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config file at {}, using defaults", path.display());
            return PorticoConfig::default();
        }
        Err(err) => {
            tracing::warn!("failed to read {}: {err}, using defaults", path.display());
            return PorticoConfig::default();
        }
    };

    match toml::from_str::<PorticoConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("failed to parse {}: {err}, using defaults", path.display());
            PorticoConfig::default()
        }
    }
}

/// Apply `PORTICO_*` overrides from `lookup` (injected for testability).
pub fn apply_env_overrides(
    mut config: PorticoConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> PorticoConfig {
    if let Some(url) = lookup(ENV_API_URL) {
        config.api_base_url = url;
    }
    if let Some(url) = lookup(ENV_DATASTORE_URL) {
        config.datastore.url = Some(url);
    }
    if let Some(key) = lookup(ENV_DATASTORE_KEY) {
        config.datastore.api_key = Some(key);
    }
    if let Some(url) = lookup(ENV_UPSTREAM_API_URL) {
        config.upstream_api_url = Some(url);
    }
    if let Some(url) = lookup(ENV_NOTIFY_WEBHOOK_URL) {
        config.notify_webhook_url = Some(url);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config_file(&tmp.path().join("config.toml")).await;
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert!(!config.datastore.is_configured());
    }

    #[tokio::test]
    async fn valid_toml_is_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(
            &path,
            r#"
api_base_url = "https://portfolio.example.com/api"
notify_webhook_url = "https://hooks.example.com/catch/abc"

[datastore]
url = "https://db.example.com"
api_key = "anon-key"
"#,
        )
        .await
        .unwrap();

        let config = load_config_file(&path).await;
        assert_eq!(config.api_base_url, "https://portfolio.example.com/api");
        assert!(config.datastore.is_configured());
        assert_eq!(
            config.notify_webhook_url.as_deref(),
            Some("https://hooks.example.com/catch/abc")
        );
    }

    #[tokio::test]
    async fn invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config_file(&path).await;
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
    }

    #[test]
    fn env_overrides_take_priority() {
        let config = apply_env_overrides(PorticoConfig::default(), |name| match name {
            ENV_API_URL => Some("https://override.example.com/api".to_string()),
            ENV_DATASTORE_URL => Some("https://db.example.com".to_string()),
            ENV_DATASTORE_KEY => Some("anon-key".to_string()),
            _ => None,
        });

        assert_eq!(config.api_base_url, "https://override.example.com/api");
        assert!(config.datastore.is_configured());
        assert!(config.upstream_api_url.is_none());
    }

    #[test]
    fn no_env_leaves_file_config_untouched() {
        let mut file_config = PorticoConfig::default();
        file_config.api_base_url = "https://from-file.example.com/api".to_string();

        let config = apply_env_overrides(file_config, |_| None);
        assert_eq!(config.api_base_url, "https://from-file.example.com/api");
    }
}
