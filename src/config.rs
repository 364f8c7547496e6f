//! Configuration management for the Discover Weekly backup.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Everything is read and validated once,
//! up front, into a [`Config`] that is passed explicitly to every step of a
//! run. A missing value aborts startup with [`SyncError::Configuration`]
//! before a single request goes out.
//!
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Defaults for the endpoint URLs

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{Res, SyncError};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

const CLIENT_ID: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
const CLIENT_SECRET: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";
const REFRESH_TOKEN: &str = "SPOTIFY_REFRESH_TOKEN";
const SOURCE_ACCOUNT_ID: &str = "SPOTIFY_ID";
const BACKUP_PLAYLIST_ID: &str = "BACKUP_PLAYLIST_ID";
const USER_ID: &str = "SPOTIFY_USER_ID";
const DISCOVER_WEEKLY_PLAYLIST_ID: &str = "DISCOVER_WEEKLY_PLAYLIST_ID";
const API_URL: &str = "SPOTIFY_API_URL";
const TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";

/// Loads environment variables from `.env` in the local data directory.
///
/// The file lives at:
/// - Linux: `~/.local/share/dwbackup/.env`
/// - macOS: `~/Library/Application Support/dwbackup/.env`
/// - Windows: `%LOCALAPPDATA%/dwbackup/.env`
///
/// A missing file, or a data directory that does not exist or cannot be
/// read, is fine: under a scheduler the settings usually arrive as plain
/// environment variables, and only a missing setting may abort startup.
/// Variables already set in the environment are not overridden.
///
/// # Errors
///
/// Returns an error string only if an existing file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    load_env_from(&env_path()).await
}

/// Loads `path` into the environment if it is a regular file.
pub async fn load_env_from(path: &Path) -> Result<(), String> {
    let is_file = async_fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);

    if is_file {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("dwbackup/.env");
    path
}

/// Client id and secret, the pair the token endpoint authenticates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Validated settings for one process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub refresh_token: String,
    /// Account that owns the weekly discovery playlist (normally `spotify`).
    pub source_account_id: String,
    pub backup_playlist_id: String,
    pub user_id: String,
    /// Skips the catalog search when set.
    pub discover_weekly_playlist_id: Option<String>,
    pub api_url: String,
    pub token_url: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Every missing or blank required key is collected so a single error
    /// lists all of them.
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut missing = Vec::new();
        let mut required = |key: &'static str| {
            value(key).unwrap_or_else(|| {
                missing.push(key);
                String::new()
            })
        };

        let client_id = required(CLIENT_ID);
        let client_secret = required(CLIENT_SECRET);
        let refresh_token = required(REFRESH_TOKEN);
        let source_account_id = required(SOURCE_ACCOUNT_ID);
        let backup_playlist_id = required(BACKUP_PLAYLIST_ID);
        let user_id = required(USER_ID);

        if !missing.is_empty() {
            return Err(SyncError::Configuration(format!(
                "missing required setting(s): {}",
                missing.join(", ")
            )));
        }

        Ok(Config {
            credentials: Credentials {
                client_id,
                client_secret,
            },
            refresh_token,
            source_account_id,
            backup_playlist_id,
            user_id,
            discover_weekly_playlist_id: value(DISCOVER_WEEKLY_PLAYLIST_ID),
            api_url: value(API_URL)
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token_url: value(TOKEN_URL).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
        })
    }
}
