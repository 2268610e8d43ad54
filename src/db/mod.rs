//! Database layer for empdb.
//!
//! Built on SQLite through `rusqlite`. The layer is split in two:
//!
//! - [`db`]: connection settings and the per-call connection provider
//! - [`employees`]: parameterized CRUD and query operations on the
//!   `employees` table
//!
//! ## Usage
//!
//! ```rust,no_run
//! use empdb::db::{db::{ConnectionSettings, Db}, employees::Employees};
//! use empdb::libs::config::Config;
//!
//! let db = Db::new(ConnectionSettings::from_config(&Config::load(".env")));
//! db.test_connection()?;
//! let employees = Employees::new(db);
//! println!("{} employees", employees.count()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Connection settings and the connection provider.
///
/// Provides the `Db` struct that opens one SQLite connection per call and
/// verifies the store at startup.
pub mod db;

/// Employee data access.
///
/// One method per operation, each running a single parameterized
/// statement on its own connection.
pub mod employees;
