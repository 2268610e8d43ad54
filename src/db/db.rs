//! Connection provider for the employee store.
//!
//! [`ConnectionSettings`] collects the connection parameters from a
//! [`Config`], [`Db`] opens one short-lived connection per call. There is
//! no pooling: every data-access operation acquires its own connection and
//! drops it before returning, which closes it on every exit path.

use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::ConnectionError;
use rusqlite::Connection;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, info};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: &str = "3306";
pub const DEFAULT_NAME: &str = "employee_db";
pub const DEFAULT_USERNAME: &str = "root";
pub const DEFAULT_PASSWORD: &str = "";
pub const DEFAULT_DRIVER: &str = "sqlite";

const SCHEMA_EMPLOYEES: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    department TEXT NOT NULL,
    salary TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";

/// Connection parameters read from `DB_*` configuration keys.
#[derive(Clone)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: String,
    pub name: String,
    pub username: String,
    pub password: String,
    pub driver: String,
    pub data_dir: DataStorage,
}

impl ConnectionSettings {
    pub fn from_config(config: &Config) -> Self {
        let data_dir = match config.get("DB_DATA_DIR") {
            Some(dir) if !dir.is_empty() => DataStorage::at(dir),
            _ => DataStorage::new(),
        };

        Self {
            host: config.get_or("DB_HOST", DEFAULT_HOST),
            port: config.get_or("DB_PORT", DEFAULT_PORT),
            name: config.get_or("DB_NAME", DEFAULT_NAME),
            username: config.get_or("DB_USERNAME", DEFAULT_USERNAME),
            password: config.get_or("DB_PASSWORD", DEFAULT_PASSWORD),
            driver: config.get_or("DB_DRIVER", DEFAULT_DRIVER),
            data_dir,
        }
    }

    /// Location of the store file for the embedded driver.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.get_path(&format!("{}.db", self.name))
    }

    /// Human-readable connection target. Never includes the password.
    pub fn target(&self) -> String {
        format!(
            "{}://{}@{}:{}/{} ({})",
            self.driver,
            self.username,
            self.host,
            self.port,
            self.name,
            self.database_path().display()
        )
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"***")
            .field("driver", &self.driver)
            .field("data_dir", &self.data_dir)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Db {
    settings: ConnectionSettings,
}

impl Db {
    pub fn new(settings: ConnectionSettings) -> Self {
        Db { settings }
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    /// Opens a fresh connection. The caller owns it; dropping it closes it.
    pub fn connect(&self) -> Result<Connection, ConnectionError> {
        if !self.settings.driver.eq_ignore_ascii_case(DEFAULT_DRIVER) {
            return Err(ConnectionError::UnsupportedDriver(self.settings.driver.clone()));
        }

        let dir = self.settings.data_dir.base_path();
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| ConnectionError::DataDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let path = self.settings.database_path();
        let conn = Connection::open(&path).map_err(|source| ConnectionError::Open {
            target: self.settings.target(),
            source,
        })?;
        debug!(path = %path.display(), "database connection opened");

        Ok(conn)
    }

    /// Verifies the store is reachable and the employees table exists.
    ///
    /// Run once at startup; an error here means the session cannot start.
    pub fn test_connection(&self) -> Result<(), ConnectionError> {
        let conn = self.connect().inspect_err(|e| error!("database connection test failed: {}", e))?;
        conn.execute_batch(SCHEMA_EMPLOYEES).map_err(|source| {
            let err = ConnectionError::Open {
                target: self.settings.target(),
                source,
            };
            error!("database connection test failed: {}", err);
            err
        })?;
        info!(db = %self.settings.target(), "database connection verified");

        Ok(())
    }
}
