//! Error taxonomy for empdb.
//!
//! Each layer owns one error type:
//!
//! - [`ConfigError`]: problems reading the key/value configuration file.
//!   Never fatal, the loader logs them and falls back to defaults.
//! - [`ConnectionError`]: the store cannot be reached. Fatal during the
//!   startup check, reported per operation afterwards.
//! - [`StoreError`]: failures of a single data-access operation, with the
//!   unique email constraint surfaced as [`StoreError::DuplicateKey`].
//! - [`ValidationError`]: user input breaking a business rule. The console
//!   workflow reports these and re-prompts or aborts the current action.
//! - [`StatsError`]: salary statistics that cannot be computed.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: expected KEY=VALUE")]
    MalformedLine { line: usize },
}

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("unsupported database driver '{0}'")]
    UnsupportedDriver(String),
    #[error("cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot open database {target}: {source}")]
    Open {
        target: String,
        #[source]
        source: rusqlite::Error,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Connection(#[from] ConnectionError),
    #[error("an employee with email '{0}' already exists")]
    DuplicateKey(String),
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Department cannot be empty")]
    EmptyDepartment,
    #[error("Salary must be greater than 0")]
    NonPositiveSalary,
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("no employees to summarise")]
    Empty,
    #[error("salary total exceeds the largest representable amount")]
    Overflow,
}

/// Standard input reached end of file while the console expected a line.
#[derive(Debug, Error)]
#[error("input closed")]
pub struct InputClosed;
