use super::Session;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;

pub fn cmd(session: &mut Session) -> Result<()> {
    msg_print!(Message::SearchByIdHeader, true);

    let id = session.ask_id(Message::PromptEmployeeId)?;
    match session.employees.get_by_id(id) {
        Ok(Some(employee)) => {
            msg_success!(Message::EmployeeFound);
            View::employee(&employee);
        }
        Ok(None) => msg_error!(Message::EmployeeNotFound(id)),
        Err(e) => msg_error!(Message::LookupFailed(e.to_string())),
    }

    Ok(())
}
