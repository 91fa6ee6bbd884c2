//! Application Configuration
//!
//! Read from `config.json` in the app config dir. A missing file is created
//! with defaults and a freshly generated session secret.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::UserAccount;

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;
pub const MAX_SESSION_TTL_MINUTES: i64 = 60 * 24 * 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key material for signing session tokens
    pub session_secret: String,
    pub session_ttl_minutes: i64,
    pub users: Vec<UserAccount>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_secret: String::new(),
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
            users: vec![UserAccount::new("vivek@example.com", "Vivek", "admin", "test123")],
        }
    }
}

impl AppConfig {
    /// Load config from `dir`, writing a default file if none exists
    pub fn load_or_init(dir: &Path) -> Result<Self, String> {
        std::fs::create_dir_all(dir).map_err(|e| format!("Failed to create config dir: {}", e))?;
        let path = dir.join(CONFIG_FILE);

        let mut config = if path.exists() {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            serde_json::from_str::<AppConfig>(&text)
                .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?
        } else {
            AppConfig::default()
        };

        let mut changed = !path.exists();
        if config.session_secret.is_empty() {
            config.session_secret = generate_secret(dir);
            changed = true;
        }
        if config.session_ttl_minutes <= 0 {
            log::warn!("session_ttl_minutes must be positive, using {}", DEFAULT_SESSION_TTL_MINUTES);
            config.session_ttl_minutes = DEFAULT_SESSION_TTL_MINUTES;
        } else if config.session_ttl_minutes > MAX_SESSION_TTL_MINUTES {
            log::warn!("session_ttl_minutes capped at {}", MAX_SESSION_TTL_MINUTES);
            config.session_ttl_minutes = MAX_SESSION_TTL_MINUTES;
        }

        if changed {
            let text = serde_json::to_string_pretty(&config).map_err(|e| e.to_string())?;
            std::fs::write(&path, text).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        }
        Ok(config)
    }
}

fn generate_secret(dir: &Path) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(dir.to_string_lossy().as_bytes());
    hasher.update(&chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default().to_le_bytes());
    hasher.update(&std::process::id().to_le_bytes());
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_init(dir.path()).unwrap();

        assert!(dir.path().join(CONFIG_FILE).exists());
        assert_eq!(config.session_ttl_minutes, DEFAULT_SESSION_TTL_MINUTES);
        assert_eq!(config.session_secret.len(), 64);
        assert_eq!(config.users.len(), 1);
        assert!(config.users[0].verify_password("test123"));
    }

    #[test]
    fn test_secret_is_stable_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let first = AppConfig::load_or_init(dir.path()).unwrap();
        let second = AppConfig::load_or_init(dir.path()).unwrap();
        assert_eq!(first.session_secret, second.session_secret);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"session_secret":"abc","session_ttl_minutes":0}"#).unwrap();

        let config = AppConfig::load_or_init(dir.path()).unwrap();
        assert_eq!(config.session_secret, "abc");
        assert_eq!(config.session_ttl_minutes, DEFAULT_SESSION_TTL_MINUTES);
        assert_eq!(config.users[0].email, "vivek@example.com");
    }

    #[test]
    fn test_huge_ttl_is_capped() {
        let dir = tempfile::tempdir().unwrap();
        let text = format!(r#"{{"session_secret":"abc","session_ttl_minutes":{}}}"#, i64::MAX);
        std::fs::write(dir.path().join(CONFIG_FILE), text).unwrap();

        let config = AppConfig::load_or_init(dir.path()).unwrap();
        assert_eq!(config.session_ttl_minutes, MAX_SESSION_TTL_MINUTES);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{not json").unwrap();
        assert!(AppConfig::load_or_init(dir.path()).is_err());
    }
}
