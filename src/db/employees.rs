//! Data access for employee records.
//!
//! Each method opens its own connection through [`Db`], runs exactly one
//! parameterized statement, maps rows into [`Employee`] values and drops
//! the connection before returning. Nothing is cached between calls.
//!
//! ## Error Mapping
//!
//! - Connection failures → [`StoreError::Connection`]
//! - Unique email violations → [`StoreError::DuplicateKey`]
//! - Anything else from the engine → [`StoreError::Storage`]
//!
//! "Nothing matched" is never an error: lookups return `None` or an empty
//! vector, update and delete return `false`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use empdb::db::db::{ConnectionSettings, Db};
//! use empdb::db::employees::Employees;
//! use empdb::libs::config::Config;
//! use empdb::libs::employee::Employee;
//! use rust_decimal::Decimal;
//!
//! let db = Db::new(ConnectionSettings::from_config(&Config::load(".env")));
//! db.test_connection()?;
//! let employees = Employees::new(db);
//! let saved = employees.create(&Employee::new("Ann", "ann@corp.io", "Sales", Decimal::new(5000, 0)))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::db::Db;
use crate::libs::employee::Employee;
use crate::libs::error::StoreError;
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{params, ErrorCode, Row};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, error};

const INSERT_EMPLOYEE: &str =
    "INSERT INTO employees (name, email, department, salary) VALUES (?1, ?2, ?3, ?4) RETURNING id, created_at";
const SELECT_ALL_EMPLOYEES: &str = "SELECT id, name, email, department, salary, created_at FROM employees ORDER BY id";
const SELECT_EMPLOYEE_BY_ID: &str = "SELECT id, name, email, department, salary, created_at FROM employees WHERE id = ?1";
const UPDATE_EMPLOYEE: &str = "UPDATE employees SET name = ?1, email = ?2, department = ?3, salary = ?4 WHERE id = ?5";
const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = ?1";
const SELECT_EMPLOYEES_BY_DEPARTMENT: &str =
    "SELECT id, name, email, department, salary, created_at FROM employees WHERE department = ?1 ORDER BY id";
const COUNT_EMPLOYEES: &str = "SELECT COUNT(*) FROM employees";
const EXISTS_BY_EMAIL: &str = "SELECT EXISTS(SELECT 1 FROM employees WHERE email = ?1)";

#[derive(Debug, Clone)]
pub struct Employees {
    db: Db,
}

impl Employees {
    pub fn new(db: Db) -> Self {
        Employees { db }
    }

    /// Inserts a new employee and returns it with the store-assigned id and
    /// creation time filled in.
    pub fn create(&self, employee: &Employee) -> Result<Employee, StoreError> {
        let conn = self.db.connect()?;
        let result = conn.query_row(
            INSERT_EMPLOYEE,
            params![employee.name, employee.email, employee.department, employee.salary.to_string()],
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, NaiveDateTime>(1)?)),
        );

        match result {
            Ok((id, created_at)) => {
                debug!(id, "employee created");
                Ok(Employee {
                    id: Some(id),
                    created_at: Some(created_at),
                    ..employee.clone()
                })
            }
            Err(e) => Err(log_failure("create employee", classify(e, &employee.email))),
        }
    }

    /// Every employee, ordered by ascending id.
    pub fn get_all(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = self.fetch(SELECT_ALL_EMPLOYEES, params![]).map_err(|e| log_failure("list employees", e))?;
        debug!(count = employees.len(), "employees retrieved");
        Ok(employees)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Employee>, StoreError> {
        let mut employees = self
            .fetch(SELECT_EMPLOYEE_BY_ID, params![id])
            .map_err(|e| log_failure("get employee by id", e))?;
        debug!(id, found = !employees.is_empty(), "employee lookup");
        Ok(employees.pop())
    }

    /// Overwrites name, email, department and salary of the row with the
    /// employee's id. Returns `false` when no such row exists.
    pub fn update(&self, employee: &Employee) -> Result<bool, StoreError> {
        let Some(id) = employee.id else {
            debug!("update skipped, employee has no id");
            return Ok(false);
        };

        let conn = self.db.connect()?;
        let affected = conn
            .execute(
                UPDATE_EMPLOYEE,
                params![employee.name, employee.email, employee.department, employee.salary.to_string(), id],
            )
            .map_err(|e| log_failure("update employee", classify(e, &employee.email)))?;
        debug!(id, affected, "employee update");

        Ok(affected == 1)
    }

    /// Removes the row with `id`. Returns `false` when nothing was deleted.
    pub fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.db.connect()?;
        let affected = conn
            .execute(DELETE_EMPLOYEE, params![id])
            .map_err(|e| log_failure("delete employee", StoreError::Storage(e)))?;
        debug!(id, affected, "employee delete");

        Ok(affected > 0)
    }

    /// Employees whose department equals `department` exactly, by ascending id.
    pub fn get_by_department(&self, department: &str) -> Result<Vec<Employee>, StoreError> {
        let employees = self
            .fetch(SELECT_EMPLOYEES_BY_DEPARTMENT, params![department])
            .map_err(|e| log_failure("search by department", e))?;
        debug!(department, count = employees.len(), "department search");
        Ok(employees)
    }

    pub fn count(&self) -> Result<i64, StoreError> {
        let conn = self.db.connect()?;
        let count = conn
            .query_row(COUNT_EMPLOYEES, [], |row| row.get(0))
            .map_err(|e| log_failure("count employees", StoreError::Storage(e)))?;
        debug!(count, "employees counted");
        Ok(count)
    }

    /// Best-effort duplicate check before an insert. The UNIQUE constraint
    /// is still the authority, see [`StoreError::DuplicateKey`].
    pub fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let conn = self.db.connect()?;
        let exists = conn
            .query_row(EXISTS_BY_EMAIL, params![email], |row| row.get(0))
            .map_err(|e| log_failure("check email", StoreError::Storage(e)))?;
        Ok(exists)
    }

    fn fetch(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<Employee>, StoreError> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, map_employee)?;

        let mut employees = Vec::new();
        for employee in rows {
            employees.push(employee?);
        }

        Ok(employees)
    }
}

fn map_employee(row: &Row<'_>) -> rusqlite::Result<Employee> {
    let salary: String = row.get(4)?;
    let salary = Decimal::from_str(&salary).map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        department: row.get(3)?,
        salary,
        created_at: row.get(5)?,
    })
}

/// Separates unique-constraint violations from other engine failures.
fn classify(err: rusqlite::Error, email: &str) -> StoreError {
    if let rusqlite::Error::SqliteFailure(failure, _) = &err {
        if failure.code == ErrorCode::ConstraintViolation && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE {
            return StoreError::DuplicateKey(email.to_string());
        }
    }
    StoreError::Storage(err)
}

fn log_failure(operation: &str, err: StoreError) -> StoreError {
    error!(operation, "{}", err);
    err
}
