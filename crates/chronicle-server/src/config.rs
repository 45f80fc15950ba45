//! Environment-driven configuration.
//!
//! | variable                  | default        |
//! |---------------------------|----------------|
//! | `CHRONICLE_HOST`          | `0.0.0.0`      |
//! | `PORT`                    | `5000`         |
//! | `CHRONICLE_DATABASE_PATH` | `chronicle.db` |
//! | `CHRONICLE_DAILY_AT`      | `00:00`        |
//! | `CHRONICLE_LOG_FORMAT`    | `json`         |

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use eyre::WrapErr;

use crate::jobs::schedule::DailyTime;

pub const HOST_VAR: &str = "CHRONICLE_HOST";
pub const PORT_VAR: &str = "PORT";
pub const DATABASE_PATH_VAR: &str = "CHRONICLE_DATABASE_PATH";
pub const DAILY_AT_VAR: &str = "CHRONICLE_DAILY_AT";
pub const LOG_FORMAT_VAR: &str = "CHRONICLE_LOG_FORMAT";

/// Value of `CHRONICLE_DATABASE_PATH` that selects a throwaway in-memory store.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: DatabaseLocation,
    /// Local wall-clock time of the daily article.
    pub daily_at: DailyTime,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" => Ok(LogFormat::Text),
            other => Err(format!("unknown log format {other:?} (expected json or text)")),
        }
    }
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys take their
    /// defaults; set but malformed keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let host = lookup(HOST_VAR).unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, PORT_VAR, 5000)?;
        let daily_at = parse_or(&lookup, DAILY_AT_VAR, DailyTime::MIDNIGHT)?;
        let log_format = parse_or(&lookup, LOG_FORMAT_VAR, LogFormat::Json)?;

        let database = match lookup(DATABASE_PATH_VAR) {
            Some(path) if path == IN_MEMORY => DatabaseLocation::Memory,
            Some(path) => DatabaseLocation::File(PathBuf::from(path)),
            None => DatabaseLocation::File(PathBuf::from("chronicle.db")),
        };

        Ok(Self {
            host,
            port,
            database,
            daily_at,
            log_format,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| eyre::eyre!("{e}"))
            .wrap_err_with(|| format!("invalid {key} value {raw:?}")),
    }
}
