use super::Session;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;

pub fn cmd(session: &mut Session) -> Result<()> {
    msg_print!(Message::AllEmployeesHeader, true);

    match session.employees.get_all() {
        Ok(employees) if employees.is_empty() => msg_info!(Message::NoEmployeesFound),
        Ok(employees) => {
            msg_print!(Message::EmployeesFoundCount(employees.len()));
            View::employees(&employees);
        }
        Err(e) => msg_error!(Message::ListEmployeesFailed(e.to_string())),
    }

    Ok(())
}
