use super::Session;
use crate::libs::messages::Message;
use crate::libs::validation::validate_department;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;

pub fn cmd(session: &mut Session) -> Result<()> {
    msg_print!(Message::DepartmentSearchHeader, true);

    let department = match validate_department(&session.ask(Message::PromptDepartmentSearch)?) {
        Ok(department) => department,
        Err(e) => {
            msg_error!(Message::Invalid(e.to_string()));
            return Ok(());
        }
    };

    match session.employees.get_by_department(&department) {
        Ok(employees) if employees.is_empty() => msg_info!(Message::NoEmployeesInDepartment(department)),
        Ok(employees) => {
            msg_success!(Message::EmployeesInDepartment(department));
            View::employees(&employees);
        }
        Err(e) => msg_error!(Message::SearchFailed(e.to_string())),
    }

    Ok(())
}
