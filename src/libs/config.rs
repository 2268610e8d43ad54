//! Key/value configuration for empdb.
//!
//! Settings come from a plain text file of `KEY=VALUE` lines (by default
//! `.env` in the working directory) with the process environment as the
//! fallback. The loaded [`Config`] is immutable and handed to whoever needs
//! it, there is no process-wide cache.
//!
//! ## File Format
//!
//! ```text
//! # Database connection
//! DB_HOST=localhost
//! DB_NAME = employee_db
//! ```
//!
//! - Lines are trimmed, blank lines and lines starting with `#` are skipped
//! - Each line is split on the first `=`, key and value are trimmed
//! - Malformed lines are logged and ignored
//!
//! ## Lookup Order
//!
//! Entries read from the file win over process environment variables.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use empdb::libs::config::Config;
//!
//! let config = Config::load(".env");
//! let host = config.get_or("DB_HOST", "localhost");
//! ```

use crate::libs::error::ConfigError;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

/// Default configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".env";

#[derive(Debug, Clone, Default)]
pub struct Config {
    entries: HashMap<String, String>,
}

impl Config {
    /// Reads the configuration file at `path`.
    ///
    /// A missing or unreadable file is not an error: the returned config is
    /// empty and every lookup falls through to the process environment.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config = Self::parse(&contents);
                info!(path = %path.display(), keys = config.entries.len(), "configuration loaded");
                config
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "config file not found, using environment variables");
                Self::default()
            }
            Err(source) => {
                let err = ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                };
                warn!("{}", err);
                Self::default()
            }
        }
    }

    /// Builds a config from file contents already in memory.
    pub fn parse(contents: &str) -> Self {
        let mut entries = HashMap::new();

        for (index, raw) in contents.lines().enumerate() {
            match parse_line(raw, index + 1) {
                Ok(Some((key, value))) => {
                    entries.insert(key, value);
                }
                Ok(None) => {}
                Err(err) => warn!("skipping config entry: {}", err),
            }
        }

        Self { entries }
    }

    /// Looks a key up in the file entries, then in the process environment.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.entries.get(key) {
            return Some(value.clone());
        }
        let value = env::var(key).ok();
        if value.is_some() {
            debug!(key, "value taken from process environment");
        }
        value
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Parses one line, returning `None` for blanks and comments.
fn parse_line(raw: &str, line_no: usize) -> Result<Option<(String, String)>, ConfigError> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    match line.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok(Some((key.trim().to_string(), value.trim().to_string()))),
        _ => Err(ConfigError::MalformedLine { line: line_no }),
    }
}

