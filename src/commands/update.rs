use super::Session;
use crate::libs::error::StoreError;
use crate::libs::formatter::format_money;
use crate::libs::messages::Message;
use crate::libs::validation::{parse_decimal, validate_email, validate_salary};
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn cmd(session: &mut Session) -> Result<()> {
    msg_print!(Message::UpdateEmployeeHeader, true);

    let id = session.ask_id(Message::PromptEmployeeIdToUpdate)?;
    let mut employee = match session.employees.get_by_id(id) {
        Ok(Some(employee)) => employee,
        Ok(None) => {
            msg_error!(Message::EmployeeNotFound(id));
            return Ok(());
        }
        Err(e) => {
            msg_error!(Message::LookupFailed(e.to_string()));
            return Ok(());
        }
    };

    msg_print!(Message::CurrentEmployeeDetails);
    msg_print!(employee);
    msg_print!(Message::EnterNewDetails, true);

    let name = session.ask(Message::PromptNewName(employee.name.clone()))?;
    if !name.is_empty() {
        employee.name = name;
    }

    let email = session.ask(Message::PromptNewEmail(employee.email.clone()))?;
    if !email.is_empty() {
        match validate_email(&email) {
            Ok(email) => employee.email = email,
            Err(e) => {
                msg_error!(Message::Invalid(e.to_string()));
                return Ok(());
            }
        }
    }

    let department = session.ask(Message::PromptNewDepartment(employee.department.clone()))?;
    if !department.is_empty() {
        employee.department = department;
    }

    if let Some(salary) = ask_new_salary(session, &employee.salary)? {
        match validate_salary(salary) {
            Ok(salary) => employee.salary = salary,
            Err(e) => {
                msg_error!(Message::Invalid(e.to_string()));
                return Ok(());
            }
        }
    }

    match session.employees.update(&employee) {
        Ok(true) => {
            msg_success!(Message::EmployeeUpdated);
            msg_print!(employee);
        }
        Ok(false) => msg_error!(Message::EmployeeNotFound(id)),
        Err(StoreError::DuplicateKey(_)) => msg_error!(Message::EmailAlreadyExists),
        Err(e) => msg_error!(Message::EmployeeUpdateFailed(e.to_string())),
    }

    Ok(())
}

/// `None` keeps the current salary. Non-numeric answers are asked again.
fn ask_new_salary(session: &mut Session, current: &Decimal) -> Result<Option<Decimal>> {
    loop {
        let answer = session.ask(Message::PromptNewSalary(format_money(current)))?;
        if answer.is_empty() {
            return Ok(None);
        }
        match parse_decimal(&answer) {
            Ok(salary) => return Ok(Some(salary)),
            Err(_) => msg_error!(Message::InvalidNumber),
        }
    }
}
