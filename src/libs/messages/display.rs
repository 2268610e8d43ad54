//! Display implementation for empdb messages.
//!
//! All user-facing text lives here so the command handlers only deal with
//! [`Message`] variants. Parameterised variants interpolate their values
//! directly; money values arrive pre-formatted.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::AppBanner(version) => format!(
                "{}\n    EMPLOYEE DATABASE MANAGEMENT SYSTEM v{}\n{}",
                "=".repeat(50),
                version,
                "=".repeat(50)
            ),
            Message::ConnectionEstablished(target) => format!("Connected to: {}", target),
            Message::ConnectionFailed(error) => format!("Failed to connect to database: {}", error),
            Message::ConnectionHint => "Please check the DB_* settings in your .env file or environment.".to_string(),
            Message::MainMenu => [
                "=".repeat(50),
                "               MAIN MENU".to_string(),
                "=".repeat(50),
                "1. Add New Employee".to_string(),
                "2. View All Employees".to_string(),
                "3. Search Employee by ID".to_string(),
                "4. Update Employee".to_string(),
                "5. Delete Employee".to_string(),
                "6. Search by Department".to_string(),
                "7. View Statistics".to_string(),
                "8. Exit".to_string(),
                "=".repeat(50),
            ]
            .join("\n"),
            Message::InvalidMenuChoice => "Invalid choice! Please enter 1-8.".to_string(),
            Message::PressEnterToContinue => "Press Enter to continue...".to_string(),
            Message::Goodbye => "Thank you for using Employee Database System!".to_string(),

            // === EMPLOYEE MESSAGES ===
            Message::AddEmployeeHeader => "ADD NEW EMPLOYEE".to_string(),
            Message::EmployeeCreated => "Employee added successfully!".to_string(),
            Message::EmployeeCreateFailed(error) => format!("Failed to add employee: {}", error),
            Message::EmailAlreadyExists => "Employee with this email already exists!".to_string(),
            Message::AllEmployeesHeader => "ALL EMPLOYEES".to_string(),
            Message::NoEmployeesFound => "No employees found in the database.".to_string(),
            Message::EmployeesFoundCount(count) => format!("Found {} employee(s):", count),
            Message::ListEmployeesFailed(error) => format!("Failed to retrieve employees: {}", error),
            Message::SearchByIdHeader => "SEARCH EMPLOYEE BY ID".to_string(),
            Message::EmployeeFound => "Employee Found:".to_string(),
            Message::EmployeeNotFound(id) => format!("Employee with ID {} not found", id),
            Message::LookupFailed(error) => format!("Failed to look up employee: {}", error),
            Message::UpdateEmployeeHeader => "UPDATE EMPLOYEE".to_string(),
            Message::CurrentEmployeeDetails => "Current employee details:".to_string(),
            Message::EnterNewDetails => "Enter new details (press Enter to keep current value):".to_string(),
            Message::EmployeeUpdated => "Employee updated successfully!".to_string(),
            Message::EmployeeUpdateFailed(error) => format!("Failed to update employee: {}", error),
            Message::DeleteEmployeeHeader => "DELETE EMPLOYEE".to_string(),
            Message::EmployeeToDelete => "Employee to delete:".to_string(),
            Message::EmployeeDeleted => "Employee deleted successfully!".to_string(),
            Message::EmployeeDeleteFailed(error) => format!("Failed to delete employee: {}", error),
            Message::DeletionCancelled => "Deletion cancelled.".to_string(),
            Message::DepartmentSearchHeader => "SEARCH BY DEPARTMENT".to_string(),
            Message::NoEmployeesInDepartment(department) => format!("No employees found in {} department.", department),
            Message::EmployeesInDepartment(department) => format!("Employees in {} department:", department),
            Message::SearchFailed(error) => format!("Department search failed: {}", error),

            // === STATISTICS MESSAGES ===
            Message::StatisticsHeader => "DATABASE STATISTICS".to_string(),
            Message::TotalEmployees(count) => format!("Total Employees: {}", count),
            Message::AverageSalary(amount) => format!("Average Salary: {}", amount),
            Message::HighestSalary(amount) => format!("Highest Salary: {}", amount),
            Message::LowestSalary(amount) => format!("Lowest Salary: {}", amount),
            Message::StatisticsFailed(error) => format!("Failed to compute statistics: {}", error),

            // === VALIDATION MESSAGES ===
            Message::Invalid(reason) => format!("{}!", reason),
            Message::InvalidNumber => "Please enter a valid number!".to_string(),

            // === PROMPTS ===
            Message::PromptMenuChoice => "Enter your choice (1-8)".to_string(),
            Message::PromptName => "Enter employee name".to_string(),
            Message::PromptEmail => "Enter employee email".to_string(),
            Message::PromptDepartment => "Enter department".to_string(),
            Message::PromptSalary => "Enter salary".to_string(),
            Message::PromptEmployeeId => "Enter employee ID".to_string(),
            Message::PromptEmployeeIdToUpdate => "Enter employee ID to update".to_string(),
            Message::PromptEmployeeIdToDelete => "Enter employee ID to delete".to_string(),
            Message::PromptDepartmentSearch => "Enter department name".to_string(),
            Message::PromptNewName(current) => format!("New name [{}]", current),
            Message::PromptNewEmail(current) => format!("New email [{}]", current),
            Message::PromptNewDepartment(current) => format!("New department [{}]", current),
            Message::PromptNewSalary(current) => format!("New salary [{}]", current),
            Message::PromptConfirmDelete => "Are you sure you want to delete this employee? (yes/no)".to_string(),
        };

        write!(f, "{}", text)
    }
}
