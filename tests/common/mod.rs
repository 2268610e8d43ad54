#![allow(dead_code)]

use assert_cmd::{cargo_bin_cmd, Command};
use empdb::db::db::{ConnectionSettings, Db};
use empdb::db::employees::Employees;
use empdb::libs::config::Config;
use empdb::libs::employee::Employee;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

/// The console binary, configured to use the store in `dir` and nothing
/// from the caller's environment or working directory.
pub fn empdb_in(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("empdb");
    cmd.current_dir(dir)
        .env("DB_DATA_DIR", dir)
        .env("DB_NAME", "test_employees")
        .env_remove("DB_DRIVER")
        .env_remove("RUST_LOG")
        .env_remove("EMPDB_DEBUG");
    cmd
}

/// Store rooted in `dir`, with the table already created.
pub fn employees_in(dir: &Path) -> Employees {
    let config = Config::parse(&format!("DB_DATA_DIR={}\nDB_NAME=test_employees\n", dir.display()));
    let db = Db::new(ConnectionSettings::from_config(&config));
    db.test_connection().unwrap();
    Employees::new(db)
}

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

pub fn sample(name: &str, email: &str, department: &str, salary: &str) -> Employee {
    Employee::new(name, email, department, dec(salary))
}
