//! Line-oriented console input.
//!
//! The workflow reads every answer through the [`Prompter`] trait so the
//! same handlers run against a terminal, a pipe or a scripted test input.
//!
//! - [`TerminalPrompter`] uses `dialoguer` when stdin is a terminal
//! - [`LinePrompter`] reads plain lines from any `BufRead` (pipes, files)
//!
//! End of input is reported as [`InputClosed`]; the menu loop treats it
//! like choosing Exit.

use crate::libs::error::{InputClosed, ValidationError};
use crate::libs::messages::Message;
use crate::libs::validation::{parse_decimal, parse_id};
use crate::msg_error;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Shows `prompt` and returns the answer with surrounding whitespace
    /// removed. Empty answers are allowed.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(line) => Ok(line.trim().to_string()),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Err(InputClosed.into()),
            Err(e) => Err(e.into()),
        }
    }
}

pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        LinePrompter { reader, writer }
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        LinePrompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }

        Ok(line.trim().to_string())
    }
}

/// Asks for an integer id until the answer parses.
pub fn prompt_id(prompter: &mut dyn Prompter, prompt: &Message) -> Result<i64> {
    prompt_until(prompter, prompt, parse_id)
}

/// Asks for a decimal amount until the answer parses. Range checks are
/// left to the caller.
pub fn prompt_decimal(prompter: &mut dyn Prompter, prompt: &Message) -> Result<Decimal> {
    prompt_until(prompter, prompt, parse_decimal)
}

fn prompt_until<T>(
    prompter: &mut dyn Prompter,
    prompt: &Message,
    parse: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<T> {
    loop {
        let answer = prompter.read_line(&prompt.to_string())?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(_) => msg_error!(Message::InvalidNumber),
        }
    }
}
