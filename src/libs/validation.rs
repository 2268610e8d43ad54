//! Business rules for user-supplied employee fields.
//!
//! The email rule is deliberately loose: it only asks for an `@`, a `.` and
//! more than five characters. It is not an RFC 5322 check.

use crate::libs::error::ValidationError;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.') && email.chars().count() > 5
}

pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() || !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email.to_string())
}

pub fn validate_department(department: &str) -> Result<String, ValidationError> {
    let department = department.trim();
    if department.is_empty() {
        return Err(ValidationError::EmptyDepartment);
    }
    Ok(department.to_string())
}

/// Parses a decimal amount. Accepts an optional leading `$` and thousands
/// separators (`$1,200.50`).
pub fn parse_decimal(input: &str) -> Result<Decimal, ValidationError> {
    let cleaned: String = input.trim().trim_start_matches('$').chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned).map_err(|_| ValidationError::InvalidNumber(input.trim().to_string()))
}

pub fn validate_salary(salary: Decimal) -> Result<Decimal, ValidationError> {
    if salary <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveSalary);
    }
    Ok(salary)
}

pub fn parse_salary(input: &str) -> Result<Decimal, ValidationError> {
    validate_salary(parse_decimal(input)?)
}

pub fn parse_id(input: &str) -> Result<i64, ValidationError> {
    input.trim().parse::<i64>().map_err(|_| ValidationError::InvalidNumber(input.trim().to_string()))
}
