use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{errors::Error, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_PROMO_PHOTO_PATH: &str = "logo.png";

/// How a screen change is rendered into the chat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenMode {
    /// Edit the caption of the chat's last screen message in place; send only
    /// when the chat has no such message yet.
    #[default]
    Edit,
    /// Send a fresh photo message for every screen change.
    Send,
}

impl ScreenMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "edit" => Some(ScreenMode::Edit),
            "send" => Some(ScreenMode::Send),
            _ => None,
        }
    }
}

/// On-disk shape of `config.json`.
#[derive(Deserialize)]
struct ConfigFile {
    telegram_api_token: String,
    #[serde(default)]
    promo_photo_path: Option<PathBuf>,
    #[serde(default)]
    screen_mode: Option<ScreenMode>,
}

/// Typed configuration, loaded once at startup.
#[derive(Clone)]
pub struct Config {
    pub telegram_api_token: String,
    pub promo_photo_path: PathBuf,
    pub screen_mode: ScreenMode,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_api_token", &"<redacted>")
            .field("promo_photo_path", &self.promo_photo_path)
            .field("screen_mode", &self.screen_mode)
            .finish()
    }
}

impl Config {
    /// Load `config.json` (or `$CONFIG_PATH`) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = env_path("CONFIG_PATH").unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let mut cfg = Self::from_file(&path)?;

        if let Some(token) = env_str("TELEGRAM_API_TOKEN").and_then(non_empty) {
            cfg.telegram_api_token = token;
        }
        if let Some(photo) = env_path("PROMO_PHOTO_PATH") {
            cfg.promo_photo_path = photo;
        }
        if let Some(raw) = env_str("SCREEN_MODE").and_then(non_empty) {
            cfg.screen_mode = ScreenMode::parse(&raw).ok_or_else(|| {
                Error::Config(format!("SCREEN_MODE must be `edit` or `send`, got `{raw}`"))
            })?;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(text)?;

        let telegram_api_token = file.telegram_api_token.trim().to_string();
        if telegram_api_token.is_empty() {
            return Err(Error::Config(
                "telegram_api_token must not be empty".to_string(),
            ));
        }

        Ok(Self {
            telegram_api_token,
            promo_photo_path: file
                .promo_photo_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROMO_PHOTO_PATH)),
            screen_mode: file.screen_mode.unwrap_or_default(),
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
