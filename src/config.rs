//! Configuration loading and validation.
//!
//! Two sources:
//! - `config.toml` (optional) — non-secret settings, default location
//!   `~/.reactwatch/config.toml`
//! - environment (optionally seeded from `./.env`) — the bot token and the
//!   administrator id
//!
//! Precedence: env vars > config file > defaults. The process must not start
//! without a token and a valid integer admin id.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::types::AdminTarget;

/// Environment variable holding the administrator's numeric user id.
pub const ADMIN_USER_ID_ENV: &str = "ADMIN_USER_ID";

/// Default environment variable holding the bot token.
pub const DEFAULT_BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// Fatal configuration problems. Any of these stops the process at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The bot token variable is unset or empty.
    #[error("missing bot token: set the {var} environment variable")]
    MissingToken {
        /// Name of the variable that was consulted.
        var: String,
    },

    /// No admin id in the environment or the config file.
    #[error("missing administrator id: set ADMIN_USER_ID or telegram.admin_user_id")]
    MissingAdminId,

    /// The admin id is not an integer.
    #[error("invalid administrator id {value:?}: expected an integer")]
    InvalidAdminId {
        /// The offending value.
        value: String,
    },

    /// The config file could not be read.
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`FileConfig`].
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The `.env` file exists but could not be loaded.
    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    /// The home directory could not be determined.
    #[error("cannot determine home directory")]
    HomeDir,
}

/// Contents of `config.toml`. Every field has a default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Telegram settings.
    pub telegram: TelegramConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Telegram-specific configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Environment variable name holding the bot token.
    pub bot_token_env: String,

    /// Administrator user id, used when `ADMIN_USER_ID` is unset.
    pub admin_user_id: Option<i64>,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token_env: DEFAULT_BOT_TOKEN_ENV.to_owned(),
            admin_user_id: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,

    /// Directory for daily-rotated JSON logs. Console-only when unset.
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            dir: None,
        }
    }
}

/// Fully resolved runtime configuration.
#[derive(Clone)]
pub struct Config {
    /// Telegram bot token.
    pub bot_token: String,

    /// Recipient of every notification.
    pub admin: AdminTarget,

    /// Logging settings.
    pub logging: LoggingConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"[REDACTED]")
            .field("admin", &self.admin)
            .field("logging", &self.logging)
            .finish()
    }
}

impl Config {
    /// Resolve the runtime config from file values and an env resolver.
    ///
    /// Takes the resolver as a closure so tests never touch the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error when the token is missing or the admin id is missing
    /// or not an integer.
    pub fn resolve(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let token_var = file.telegram.bot_token_env;
        let bot_token = env(&token_var)
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingToken { var: token_var })?;

        let admin_id = match env(ADMIN_USER_ID_ENV) {
            Some(raw) => parse_admin_id(&raw)?,
            None => file
                .telegram
                .admin_user_id
                .ok_or(ConfigError::MissingAdminId)?,
        };

        Ok(Self {
            bot_token,
            admin: AdminTarget(admin_id),
            logging: file.logging,
        })
    }

    /// Resolve against the real process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::resolve`].
    pub fn from_env(file: FileConfig) -> Result<Self, ConfigError> {
        Self::resolve(file, |key| std::env::var(key).ok())
    }
}

fn parse_admin_id(raw: &str) -> Result<i64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidAdminId {
            value: raw.to_owned(),
        })
}

/// Parse `config.toml` contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The config file to read: `path` when given, otherwise the default
/// location if it exists.
///
/// # Errors
///
/// Returns an error if the home directory cannot be resolved.
pub fn config_source(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = path {
        return Ok(Some(path.to_path_buf()));
    }
    let default_path = default_config_path()?;
    Ok(default_path.exists().then_some(default_path))
}

/// Load the config file at `path`, or the default location when `None`.
///
/// An explicit path must exist. A missing default file yields defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the home
/// directory cannot be resolved.
pub fn load_config(path: Option<&Path>) -> Result<FileConfig, ConfigError> {
    match config_source(path)? {
        Some(source) => load_config_file(&source),
        None => {
            debug!("no config file found, using defaults");
            Ok(FileConfig::default())
        }
    }
}

/// Name of the env file read from the working directory.
pub const DOTENV_FILE: &str = ".env";

/// Load `./.env` into the process environment if it exists.
///
/// Only the working directory is consulted, never its parents. Returns the
/// path that was loaded. Variables already set are kept.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be parsed.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    load_dotenv_from(Path::new(DOTENV_FILE))
}

/// Load a specific env file if it exists. See [`load_dotenv`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be parsed.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(Some(path.to_path_buf())),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Resolve the default config directory (`~/.reactwatch/`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let home = directories::BaseDirs::new().ok_or(ConfigError::HomeDir)?;
    Ok(home.home_dir().join(".reactwatch"))
}

/// Resolve the default config file path (`~/.reactwatch/config.toml`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}
