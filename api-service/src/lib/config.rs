use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Minimum HS256 key length (the SHA-256 output size).
const MIN_SECRET_LENGTH: usize = 32;

/// Longest accepted token lifetime: one year.
const MAX_EXPIRATION_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub users: Vec<SeedUserConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// User record served by the in-memory credential store.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedUserConfig {
    pub username: String,
    pub hashed_password: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (APP_JWT__SECRET, APP_SERVER__HTTP_PORT, APP_DATABASE__URL, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: APP_JWT__SECRET=... overrides jwt.secret
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the service cannot run safely with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {} bytes, got {}",
                MIN_SECRET_LENGTH,
                self.jwt.secret.len()
            )));
        }

        if !(1..=MAX_EXPIRATION_MINUTES).contains(&self.jwt.expiration_minutes) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must be between 1 and {}, got {}",
                MAX_EXPIRATION_MINUTES, self.jwt.expiration_minutes
            )));
        }

        Ok(())
    }

    /// Lifetime of tokens issued by the password-grant and Basic login routes.
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.jwt.expiration_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(secret: &str, expiration_minutes: i64) -> Config {
        Config {
            server: ServerConfig { http_port: 8000 },
            jwt: JwtConfig {
                secret: secret.to_string(),
                expiration_minutes,
            },
            database: None,
            users: Vec::new(),
        }
    }

    #[test]
    fn test_validate_accepts_sane_settings() {
        let config = config_with("0123456789abcdef0123456789abcdef", 30);
        assert!(config.validate().is_ok());
        assert_eq!(config.token_ttl(), chrono::Duration::minutes(30));
    }

    #[test]
    fn test_validate_rejects_short_secret() {
        let config = config_with("too-short", 30);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_ttl() {
        let config = config_with("0123456789abcdef0123456789abcdef", 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overlong_ttl() {
        let secret = "0123456789abcdef0123456789abcdef";

        assert!(config_with(secret, MAX_EXPIRATION_MINUTES).validate().is_ok());
        for minutes in [MAX_EXPIRATION_MINUTES + 1, 1_000_000_000_000, i64::MAX] {
            assert!(config_with(secret, minutes).validate().is_err());
        }
    }

    #[test]
    fn test_deserialize_seed_users() {
        let configuration = ConfigBuilder::builder()
            .add_source(File::from_str(
                r#"
                [server]
                http_port = 8080

                [jwt]
                secret = "0123456789abcdef0123456789abcdef"
                expiration_minutes = 15

                [[users]]
                username = "alice"
                hashed_password = "$argon2id$stub"
                full_name = "Alice Liddell"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: Config = configuration.try_deserialize().unwrap();
        assert!(config.database.is_none());
        assert_eq!(config.users.len(), 1);
        assert_eq!(config.users[0].username, "alice");
        assert!(!config.users[0].disabled);
        assert!(config.users[0].email.is_none());
    }
}
