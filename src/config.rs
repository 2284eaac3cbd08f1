use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use crate::constants::DEFAULT_BASE_URL;
use crate::errors::{ChatError, ChatResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub log_level: String,
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: "info".to_string(),
            tick_rate_ms: 250,
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> ChatResult<()> {
    let config_path = get_config_path()?;
    let config = load_or_create(&config_path)?;
    let config = with_env_override(config, env::var("LEXCHAT_BASE_URL").ok());

    validate_config(&config)?;

    match CONFIG.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }

    Ok(())
}

/// Loads the config file, creating it with defaults on first run.
fn load_or_create(config_path: &Path) -> ChatResult<Config> {
    if config_path.exists() {
        let config_str = fs::read_to_string(config_path)
            .map_err(|e| ChatError::config_error(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to parse config: {}", e)))
    } else {
        let config = Config::default();

        let parent = config_path
            .parent()
            .ok_or_else(|| ChatError::config_error("Config path has no parent directory"))?;
        fs::create_dir_all(parent).map_err(|e| {
            ChatError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| ChatError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(config_path, config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to write config file: {}", e)))?;

        Ok(config)
    }
}

/// Environment wins over the file for the backend location.
fn with_env_override(mut config: Config, base_url: Option<String>) -> Config {
    if let Some(url) = base_url {
        config.base_url = url;
    }
    config
}

fn get_config_path() -> ChatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ChatError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("lexchat").join("config.json"))
}

fn validate_config(config: &Config) -> ChatResult<()> {
    if config.base_url.is_empty() {
        return Err(ChatError::config_error("base_url is required"));
    }

    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(ChatError::config_error(
            "base_url must start with http:// or https://",
        ));
    }

    if config.base_url.ends_with('/') {
        return Err(ChatError::config_error(
            "base_url must not carry a trailing slash",
        ));
    }

    if config.tick_rate_ms == 0 {
        return Err(ChatError::config_error("tick_rate_ms must be greater than 0"));
    }

    Ok(())
}

pub fn get_config() -> Config {
    match CONFIG.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => {
            log::warn!("config lock poisoned, serving the last value written");
            poisoned.into_inner().clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_empty_base_url() {
        let mut config = Config::default();
        config.base_url = "".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_non_http_base_url() {
        let mut config = Config::default();
        config.base_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_trailing_slash() {
        let mut config = Config::default();
        config.base_url = "http://localhost:3000/".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_zero_tick_rate() {
        let mut config = Config::default();
        config.tick_rate_ms = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.tick_rate_ms, config.tick_rate_ms);
    }

    #[test]
    fn test_first_run_creates_file_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("lexchat").join("config.json");

        let config = load_or_create(&config_path).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config_path.exists());

        let written: Config =
            serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
        assert_eq!(written.base_url, DEFAULT_BASE_URL);
        assert_eq!(written.tick_rate_ms, Config::default().tick_rate_ms);
    }

    #[test]
    fn test_existing_file_is_loaded() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        let mut on_disk = Config::default();
        on_disk.base_url = "http://backend:8080".to_string();
        fs::write(&config_path, serde_json::to_string_pretty(&on_disk).unwrap()).unwrap();

        let config = load_or_create(&config_path).unwrap();
        assert_eq!(config.base_url, "http://backend:8080");
    }

    #[test]
    fn test_garbage_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        fs::write(&config_path, "not json").unwrap();

        assert!(matches!(
            load_or_create(&config_path),
            Err(ChatError::Config(_))
        ));
    }

    #[test]
    fn test_env_override_wins_over_file_value() {
        let mut from_file = Config::default();
        from_file.base_url = "http://backend:8080".to_string();

        let config =
            with_env_override(from_file, Some("http://override:9999".to_string()));
        assert_eq!(config.base_url, "http://override:9999");
    }

    #[test]
    fn test_env_override_absent_keeps_file_value() {
        let mut from_file = Config::default();
        from_file.base_url = "http://backend:8080".to_string();

        let config = with_env_override(from_file, None);
        assert_eq!(config.base_url, "http://backend:8080");
    }

    #[test]
    fn test_get_config_survives_a_poisoned_lock() {
        let _ = std::panic::catch_unwind(|| {
            let _guard = CONFIG.write().unwrap();
            panic!("poison the lock");
        });

        let config = get_config();
        assert!(!config.base_url.is_empty());
    }
}
