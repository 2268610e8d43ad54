//! # empdb - Employee Database
//!
//! An interactive console for managing employee records kept in a
//! relational store.
//!
//! ## Features
//!
//! - **Records**: Add, view, update and delete employees
//! - **Search**: Look employees up by id or by department
//! - **Statistics**: Head count and average, highest and lowest salary
//!
//! ## Usage
//!
//! ```rust,no_run
//! use empdb::commands::Session;
//! use empdb::db::db::{ConnectionSettings, Db};
//! use empdb::db::employees::Employees;
//! use empdb::libs::config::Config;
//! use empdb::libs::prompt::LinePrompter;
//!
//! let db = Db::new(ConnectionSettings::from_config(&Config::load(".env")));
//! db.test_connection()?;
//! let mut prompter = LinePrompter::stdio();
//! Session::new(Employees::new(db), &mut prompter).run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
