use super::Session;
use crate::libs::employee::Employee;
use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::libs::validation::{validate_department, validate_email, validate_name, validate_salary};
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;

pub fn cmd(session: &mut Session) -> Result<()> {
    msg_print!(Message::AddEmployeeHeader, true);

    let name = match validate_name(&session.ask(Message::PromptName)?) {
        Ok(name) => name,
        Err(e) => {
            msg_error!(Message::Invalid(e.to_string()));
            return Ok(());
        }
    };

    let email = match validate_email(&session.ask(Message::PromptEmail)?) {
        Ok(email) => email,
        Err(e) => {
            msg_error!(Message::Invalid(e.to_string()));
            return Ok(());
        }
    };

    match session.employees.exists_by_email(&email) {
        Ok(true) => {
            msg_error!(Message::EmailAlreadyExists);
            return Ok(());
        }
        Ok(false) => {}
        Err(e) => {
            msg_error!(Message::EmployeeCreateFailed(e.to_string()));
            return Ok(());
        }
    }

    let department = match validate_department(&session.ask(Message::PromptDepartment)?) {
        Ok(department) => department,
        Err(e) => {
            msg_error!(Message::Invalid(e.to_string()));
            return Ok(());
        }
    };

    let salary = match validate_salary(session.ask_decimal(Message::PromptSalary)?) {
        Ok(salary) => salary,
        Err(e) => {
            msg_error!(Message::Invalid(e.to_string()));
            return Ok(());
        }
    };

    let employee = Employee::new(&name, &email, &department, salary);
    match session.employees.create(&employee) {
        Ok(created) => {
            msg_success!(Message::EmployeeCreated);
            msg_print!(created);
        }
        Err(StoreError::DuplicateKey(_)) => msg_error!(Message::EmailAlreadyExists),
        Err(e) => msg_error!(Message::EmployeeCreateFailed(e.to_string())),
    }

    Ok(())
}
