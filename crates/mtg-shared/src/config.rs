//! Configuration management
//!
//! Sources, lowest to highest precedence: built-in defaults, `config/default`,
//! `config/{APP_ENV}`, `MTG_`-prefixed environment variables (`__` separates
//! sections, e.g. `MTG_SESSION__STORE=memory`), and finally the plain
//! `DATABASE_URL` / `SECRET_KEY` variables the deployment sets.

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::AppError;
use crate::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_IDLE_TIMEOUT_MINUTES, DEFAULT_SESSION_COOKIE_NAME,
    DEMO_ACCOUNT_EMAIL,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Directory served under `/static`.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    /// Signing secret for the session cookie. Empty means "generate one per process".
    pub secret_key: String,
    pub idle_timeout_minutes: i64,
    pub cookie_name: String,
    pub secure_cookie: bool,
    pub store: SessionStoreKind,
    pub demo_account_email: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStoreKind {
    Memory,
    Postgres,
}

/// In-process defaults for wiring the app without a config source (tests, tools).
impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            idle_timeout_minutes: DEFAULT_IDLE_TIMEOUT_MINUTES,
            cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
            secure_cookie: false,
            store: SessionStoreKind::Memory,
            demo_account_email: DEMO_ACCOUNT_EMAIL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let secret_key = std::env::var("SECRET_KEY")
            .or_else(|_| std::env::var("secret_key"))
            .ok();

        let config = Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("MTG")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("session.secret_key", secret_key)?
            .build()?;
        let settings: AppConfig = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Build from an inline TOML document layered over the defaults.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let settings: AppConfig = Self::with_defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.session.idle_timeout_minutes <= 0 {
            return Err(AppError::InvalidConfig(format!(
                "session.idle_timeout_minutes must be positive, got {}",
                self.session.idle_timeout_minutes
            )));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(AppError::InvalidConfig(
                "database.min_connections exceeds database.max_connections".to_string(),
            ));
        }
        Ok(())
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 5000)?
            .set_default("app.name", "mtg-server")?
            .set_default("app.static_dir", "static")?
            .set_default("database.url", DEFAULT_DATABASE_URL)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("session.secret_key", "")?
            .set_default("session.idle_timeout_minutes", DEFAULT_IDLE_TIMEOUT_MINUTES)?
            .set_default("session.cookie_name", DEFAULT_SESSION_COOKIE_NAME)?
            .set_default("session.secure_cookie", false)?
            .set_default("session.store", "postgres")?
            .set_default("session.demo_account_email", DEMO_ACCOUNT_EMAIL)
    }
}
