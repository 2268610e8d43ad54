use super::Session;
use crate::libs::messages::Message;
use crate::{msg_error, msg_print, msg_success, msg_warning};
use anyhow::Result;

/// Accepts `yes` or `y` in any letter case.
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

pub fn cmd(session: &mut Session) -> Result<()> {
    msg_print!(Message::DeleteEmployeeHeader, true);

    let id = session.ask_id(Message::PromptEmployeeIdToDelete)?;
    let employee = match session.employees.get_by_id(id) {
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

    msg_print!(Message::EmployeeToDelete);
    msg_print!(employee);

    if !is_confirmation(&session.ask(Message::PromptConfirmDelete)?) {
        msg_warning!(Message::DeletionCancelled);
        return Ok(());
    }

    match session.employees.delete(id) {
        Ok(true) => msg_success!(Message::EmployeeDeleted),
        Ok(false) => msg_error!(Message::EmployeeNotFound(id)),
        Err(e) => msg_error!(Message::EmployeeDeleteFailed(e.to_string())),
    }

    Ok(())
}
