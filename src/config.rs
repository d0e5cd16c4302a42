//! Reader configuration persistence
//!
//! Stores user preferences in `~/.config/lectio/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{Session, UserId};
use crate::reconcile::AddPolicy;

/// Where highlight rows are persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Local JSON file (defaults to `~/.config/lectio/highlights.json`)
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<PathBuf>,
    },
    /// Hosted backend exposing the highlight table over REST
    Rest {
        /// Project URL, e.g. `https://project.example.co`
        url: String,
        /// Public API key sent as the `apikey` header
        api_key: String,
        /// Signed-in user's access token; falls back to the API key
        #[serde(default, skip_serializing_if = "Option::is_none")]
        access_token: Option<String>,
        #[serde(default = "default_table")]
        table: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

fn default_table() -> String {
    "highlights".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::File { path: None }
    }
}

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Owner of the highlights read and written
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// How highlight-mode drags treat already highlighted words
    #[serde(default)]
    pub add_policy: AddPolicy,
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_user_id() -> String {
    "local".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            display_name: None,
            add_policy: AddPolicy::default(),
            store: StoreConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// The session for the configured user
    pub fn session(&self) -> Session {
        let session = Session::new(UserId::new(self.user_id.clone()));
        match &self.display_name {
            Some(name) => session.with_display_name(name.clone()),
            None => session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_file_store() {
        let config = AppConfig::default();
        assert_eq!(config.user_id, "local");
        assert_eq!(config.store, StoreConfig::File { path: None });
        assert_eq!(config.add_policy, AddPolicy::Append);
    }

    #[test]
    fn test_parse_rest_store_fills_defaults() {
        let yaml = r#"
user_id: 7c4e
add_policy: skip_covered
store:
  kind: rest
  url: https://project.example.co
  api_key: anon
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.add_policy, AddPolicy::SkipCovered);
        match config.store {
            StoreConfig::Rest {
                table,
                timeout_secs,
                access_token,
                ..
            } => {
                assert_eq!(table, "highlights");
                assert_eq!(timeout_secs, 30);
                assert!(access_token.is_none());
            }
            other => panic!("Expected rest store, got {:?}", other),
        }
    }

    #[test]
    fn test_session_uses_display_name() {
        let config = AppConfig {
            display_name: Some("Ruth".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(config.session().label(), "Ruth");
        assert_eq!(config.session().user_id.as_str(), "local");
    }
}
