// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::middleware::auth::UserCredential;
use crate::services::preview::DEFAULT_TILE_URL_TEMPLATE;
use std::collections::HashMap;
use std::env;

/// Default request body cap for uploads (10 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Basemap tile URL template for preview maps
    pub map_tile_url_template: String,
    /// Maximum accepted request body size
    pub max_upload_bytes: usize,
    /// Known users, keyed by user name
    pub users: HashMap<String, UserCredential>,
}

/// Test user name in the default config.
pub const TEST_USER: &str = "test_user";
/// Test user password in the default config.
pub const TEST_PASSWORD: &str = "test_password";

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        let mut users = HashMap::new();
        users.insert(
            TEST_USER.to_string(),
            UserCredential::from_password("test_salt_123456", TEST_PASSWORD),
        );

        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            map_tile_url_template: DEFAULT_TILE_URL_TEMPLATE.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            users,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let users = parse_users(
            &env::var("OUTSIDELY_USERS").map_err(|_| ConfigError::Missing("OUTSIDELY_USERS"))?,
        )?;

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            map_tile_url_template: env::var("MAP_TILE_URL_TEMPLATE")
                .unwrap_or_else(|_| DEFAULT_TILE_URL_TEMPLATE.to_string()),
            max_upload_bytes: match env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("MAX_UPLOAD_BYTES", raw.clone()))?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            users,
        })
    }
}

/// Parse `user:salt:sha512hex` entries separated by commas.
pub fn parse_users(raw: &str) -> Result<HashMap<String, UserCredential>, ConfigError> {
    let mut users = HashMap::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let parts: Vec<&str> = entry.split(':').collect();
        let [name, salt, hash] = parts.as_slice() else {
            return Err(ConfigError::Invalid("OUTSIDELY_USERS", entry.to_string()));
        };

        if name.is_empty() || salt.is_empty() || hash.len() != 128 || hex::decode(hash).is_err() {
            return Err(ConfigError::Invalid("OUTSIDELY_USERS", name.to_string()));
        }

        users.insert(
            name.to_string(),
            UserCredential {
                salt: salt.to_string(),
                password_hash: hash.to_ascii_lowercase(),
            },
        );
    }

    if users.is_empty() {
        return Err(ConfigError::Missing("OUTSIDELY_USERS"));
    }
    Ok(users)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::auth::hash_password;

    #[test]
    fn test_config_from_env() {
        let hash = hash_password("abc", "pw");
        env::set_var("OUTSIDELY_USERS", format!("jesse:abc:{}", hash));
        env::set_var("MAP_TILE_URL_TEMPLATE", "https://tiles.example/{z}/{x}/{y}.png");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.map_tile_url_template,
            "https://tiles.example/{z}/{x}/{y}.png"
        );
        assert!(config.users["jesse"].verify("pw"));
    }

    #[test]
    fn test_parse_users_multiple() {
        let users = parse_users(&format!(
            "a:s1:{}, b:s2:{}",
            hash_password("s1", "one"),
            hash_password("s2", "two")
        ))
        .unwrap();

        assert_eq!(users.len(), 2);
        assert!(users["a"].verify("one"));
        assert!(users["b"].verify("two"));
        assert!(!users["b"].verify("one"));
    }

    #[test]
    fn test_parse_users_rejects_malformed_entries() {
        assert!(matches!(
            parse_users("nobody"),
            Err(ConfigError::Invalid("OUTSIDELY_USERS", _))
        ));
        assert!(matches!(
            parse_users("a:salt:not-hex"),
            Err(ConfigError::Invalid(_, _))
        ));
        assert!(matches!(parse_users(" , "), Err(ConfigError::Missing(_))));
    }
}
