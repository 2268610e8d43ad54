//! Salary statistics over a set of employees.
//!
//! All arithmetic stays in [`Decimal`]; the average is rounded to two
//! places, half away from zero (half-up for the positive amounts salaries
//! always are). The total uses checked addition, so a set of very large
//! salaries reports [`StatsError::Overflow`] instead of panicking.

use crate::libs::employee::Employee;
use crate::libs::error::StatsError;
use crate::libs::formatter::round_money;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryStats {
    pub count: usize,
    pub total: Decimal,
    pub average: Decimal,
    pub highest: Decimal,
    pub lowest: Decimal,
}

impl SalaryStats {
    pub fn compute(employees: &[Employee]) -> Result<Self, StatsError> {
        let first = employees.first().ok_or(StatsError::Empty)?;

        let mut total = Decimal::ZERO;
        let mut highest = first.salary;
        let mut lowest = first.salary;
        for employee in employees {
            total = total.checked_add(employee.salary).ok_or(StatsError::Overflow)?;
            if employee.salary > highest {
                highest = employee.salary;
            }
            if employee.salary < lowest {
                lowest = employee.salary;
            }
        }

        let average = round_money(&(total / Decimal::from(employees.len())));

        Ok(SalaryStats {
            count: employees.len(),
            total,
            average,
            highest,
            lowest,
        })
    }
}
