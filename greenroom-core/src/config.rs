use serde::{Deserialize, Serialize};

/// Portal configuration, read from `config.toml` in the working directory.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The tabular store the catalog lives in.
    pub store: Store,
    /// The object store release assets upload to.
    pub storage: Storage,
    /// Where change notifications go.
    pub notifications: Notifications,
    /// Catalog-sync credentials. Only the sync job reads these.
    pub sync: Sync,
}
impl Config {
    /// The config file name.
    pub const FILENAME: &str = "config.toml";

    /// Load the config, creating a default one if none exists.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILENAME) {
            Ok(contents) => {
                // Config exists, try to parse it
                match toml::from_str(&contents) {
                    Ok(config) => config,
                    Err(e) => panic!("Failed to parse {}: {e}", Self::FILENAME),
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // No config exists, create default
                tracing::info!("no config file found, creating default config");
                Config::default()
            }
            Err(e) => {
                // Some other IO error occurred while reading
                panic!("Failed to read {}: {e}", Self::FILENAME)
            }
        }
    }

    /// Save the config.
    pub fn save(&self) {
        std::fs::write(Self::FILENAME, toml::to_string(self).unwrap()).unwrap();
        tracing::info!("saved config to {}", Self::FILENAME);
    }
}

/// The tabular store connection.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Store {
    /// The store's base URL.
    pub url: String,
    /// The API key sent with every request.
    pub api_key: String,
}
impl Default for Store {
    fn default() -> Self {
        Self {
            url: "https://YOUR_PROJECT.supabase.co".to_string(),
            api_key: "YOUR_API_KEY".to_string(),
        }
    }
}

/// The object store connection.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Storage {
    /// The object store's base URL.
    pub base_url: String,
    /// The bucket release assets upload to.
    pub bucket: String,
}
impl Default for Storage {
    fn default() -> Self {
        Self {
            base_url: "https://firebasestorage.googleapis.com".to_string(),
            bucket: "YOUR_BUCKET".to_string(),
        }
    }
}

/// Notification settings.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Notifications {
    /// The webhook change requests and release announcements go to.
    pub webhook_url: String,
}
impl Default for Notifications {
    fn default() -> Self {
        Self {
            webhook_url: "https://discord.com/api/webhooks/YOUR_WEBHOOK".to_string(),
        }
    }
}

/// Catalog-sync credentials.
#[derive(Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Sync {
    /// The catalog API client ID.
    pub client_id: String,
    /// The catalog API client secret.
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_toml() {
        let toml_str = r#"
[store]
url = "https://example.supabase.co"
api_key = "anon-key"

[storage]
base_url = "https://firebasestorage.googleapis.com"
bucket = "example.appspot.com"

[notifications]
webhook_url = "https://discord.com/api/webhooks/123/abc"

[sync]
client_id = "catalog-id"
client_secret = "catalog-secret"
"#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store.url, "https://example.supabase.co");
        assert_eq!(config.storage.bucket, "example.appspot.com");
        assert_eq!(
            config.notifications.webhook_url,
            "https://discord.com/api/webhooks/123/abc"
        );
        assert_eq!(config.sync.client_id, "catalog-id");
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[store]\nurl = \"https://x.supabase.co\"\n").unwrap();
        assert_eq!(config.store.url, "https://x.supabase.co");
        assert_eq!(config.store.api_key, "YOUR_API_KEY");
        assert_eq!(config.storage, Storage::default());
    }

    #[test]
    fn test_default_config_round_trips() {
        let config = Config::default();
        let reparsed: Config = toml::from_str(&toml::to_string(&config).unwrap()).unwrap();
        assert_eq!(config, reparsed);
    }
}
