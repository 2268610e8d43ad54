//! Core library modules for empdb.
//!
//! - **Infrastructure**: configuration, data directory, errors, messages
//! - **Domain**: the employee record, validation rules, salary statistics
//! - **Console**: prompting, money formatting, table rendering

pub mod config;
pub mod data_storage;
pub mod employee;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod prompt;
pub mod stats;
pub mod validation;
pub mod view;
