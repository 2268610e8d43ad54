//! Interactive workflow controller.
//!
//! [`Session`] runs the eight-choice menu loop. Each menu action lives in
//! its own module and follows the same shape: prompt, validate, call one
//! [`Employees`] operation, render the outcome. Store failures are rendered
//! and the loop continues; only closed input or a broken console ends the
//! session early.

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod show;
pub mod stats;
pub mod update;

use crate::db::employees::Employees;
use crate::libs::error::InputClosed;
use crate::libs::messages::Message;
use crate::libs::prompt::{prompt_decimal, prompt_id, Prompter};
use crate::{msg_error, msg_print};
use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ListAll,
    GetById,
    Update,
    Delete,
    SearchByDepartment,
    Statistics,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::ListAll),
            "3" => Some(MenuChoice::GetById),
            "4" => Some(MenuChoice::Update),
            "5" => Some(MenuChoice::Delete),
            "6" => Some(MenuChoice::SearchByDepartment),
            "7" => Some(MenuChoice::Statistics),
            "8" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Session<'a> {
    pub employees: Employees,
    pub prompter: &'a mut dyn Prompter,
    pause_after_action: bool,
}

impl<'a> Session<'a> {
    pub fn new(employees: Employees, prompter: &'a mut dyn Prompter) -> Self {
        Session {
            employees,
            prompter,
            pause_after_action: false,
        }
    }

    /// Wait for Enter after every action before redrawing the menu.
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause_after_action = pause;
        self
    }

    /// Runs the menu until Exit is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        match self.menu_loop() {
            Err(e) if e.is::<InputClosed>() => {
                debug!("input closed, ending session");
                msg_print!(Message::Goodbye, true);
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            msg_print!(Message::MainMenu, true);
            let answer = self.prompter.read_line(&Message::PromptMenuChoice.to_string())?;

            let Some(choice) = MenuChoice::parse(&answer) else {
                msg_error!(Message::InvalidMenuChoice);
                continue;
            };
            debug!(?choice, "menu choice");

            match choice {
                MenuChoice::Add => add::cmd(self)?,
                MenuChoice::ListAll => list::cmd(self)?,
                MenuChoice::GetById => show::cmd(self)?,
                MenuChoice::Update => update::cmd(self)?,
                MenuChoice::Delete => delete::cmd(self)?,
                MenuChoice::SearchByDepartment => search::cmd(self)?,
                MenuChoice::Statistics => stats::cmd(self)?,
                MenuChoice::Exit => {
                    msg_print!(Message::Goodbye, true);
                    return Ok(());
                }
            }

            if self.pause_after_action {
                self.prompter.read_line(&Message::PressEnterToContinue.to_string())?;
            }
        }
    }

    pub fn ask(&mut self, prompt: Message) -> Result<String> {
        self.prompter.read_line(&prompt.to_string())
    }

    pub fn ask_id(&mut self, prompt: Message) -> Result<i64> {
        prompt_id(&mut *self.prompter, &prompt)
    }

    pub fn ask_decimal(&mut self, prompt: Message) -> Result<Decimal> {
        prompt_decimal(&mut *self.prompter, &prompt)
    }
}
