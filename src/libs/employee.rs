//! Employee record.
//!
//! An [`Employee`] is built in memory without `id` and `created_at`; the
//! store assigns both on insert. Updates only ever change name, email,
//! department and salary. Two records are the same employee when their ids
//! match, regardless of the other fields.

use crate::libs::formatter::format_money;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Employee {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: Decimal,
    pub created_at: Option<NaiveDateTime>,
}

impl Employee {
    pub fn new(name: &str, email: &str, department: &str, salary: Decimal) -> Self {
        Employee {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            department: department.to_string(),
            salary,
            created_at: None,
        }
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Employee {
    /// One fixed-width line, e.g.
    /// `ID: 1   | Name: Ann ... | Salary: $1,200.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {:<3} | Name: {:<20} | Email: {:<25} | Department: {:<10} | Salary: {}",
            self.id.unwrap_or(0),
            self.name,
            self.email,
            self.department,
            format_money(&self.salary)
        )
    }
}
