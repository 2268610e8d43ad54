use super::employee::Employee;
use super::formatter::format_money;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn employees(employees: &[Employee]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL", "DEPARTMENT", "SALARY"]);
        for employee in employees {
            table.add_row(row![
                employee.id.unwrap_or(0),
                employee.name,
                employee.email,
                employee.department,
                format_money(&employee.salary)
            ]);
        }
        table.printstd();
    }

    pub fn employee(employee: &Employee) {
        let mut table = Table::new();

        table.add_row(row!["ID", employee.id.unwrap_or(0)]);
        table.add_row(row!["Name", employee.name]);
        table.add_row(row!["Email", employee.email]);
        table.add_row(row!["Department", employee.department]);
        table.add_row(row!["Salary", format_money(&employee.salary)]);
        table.add_row(row![
            "Created",
            employee.created_at.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_default()
        ]);
        table.printstd();
    }
}
