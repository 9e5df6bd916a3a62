//! Interactive sort order selection.
//!
//! The menu is written to the caller's output and rejected answers to its
//! diagnostics stream. Answers come from a `ChoiceReader`, which is a
//! `dialoguer` prompt on a terminal and a plain line reader when stdin is piped.

use crate::error::{AppError, Result};
use crate::models::SortOrder;
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub const CHOICE_PROMPT: &str = "Enter your choice (1/2/3/4/5/6)";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. You can only enter 1/2/3/4/5/6.";

/// Source of menu answers.
pub trait ChoiceReader {
    /// Reads one answer. Returns `Ok(None)` once no more input is available.
    fn read_choice(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Reads answers from an interactive terminal through `dialoguer`.
pub struct TerminalReader {
    theme: ColorfulTheme,
}

impl TerminalReader {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceReader for TerminalReader {
    fn read_choice(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(answer))
    }
}

/// Reads one answer per line from any buffered reader, echoing the prompt to `echo`.
pub struct LineReader<R, W> {
    input: R,
    echo: W,
}

impl<R: BufRead, W: Write> LineReader<R, W> {
    pub fn new(input: R, echo: W) -> Self {
        Self { input, echo }
    }
}

impl<R: BufRead, W: Write> ChoiceReader for LineReader<R, W> {
    fn read_choice(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.echo, "{}: ", prompt)?;
        self.echo.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Writes the numbered sort menu to `out`.
pub fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{}",
        "How do you want the data to be sorted?".cyan().bold()
    )?;
    for (index, order) in SortOrder::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, order)?;
    }
    Ok(())
}

/// Shows the menu on `out` and asks until a valid choice is entered.
///
/// Invalid answers print a warning on `diag` and show the menu again.
///
/// # Errors
///
/// Returns `AppError::InputClosed` if the reader runs out of input first, and
/// propagates any read or write failure.
pub fn prompt_sort_order<C, W, D>(reader: &mut C, out: &mut W, diag: &mut D) -> Result<SortOrder>
where
    C: ChoiceReader + ?Sized,
    W: Write,
    D: Write,
{
    loop {
        print_menu(out)?;
        out.flush()?;

        let answer = match reader.read_choice(CHOICE_PROMPT)? {
            Some(answer) => answer,
            None => {
                warn!("Input closed while waiting for a sort choice");
                return Err(AppError::InputClosed);
            },
        };

        match SortOrder::from_choice(&answer) {
            Some(order) => {
                debug!("Selected sort order: {}", order);
                return Ok(order);
            },
            None => {
                debug!("Rejected sort choice {:?}", answer.trim());
                writeln!(diag, "{}\n", INVALID_CHOICE_MESSAGE.red())?;
                diag.flush()?;
            },
        }
    }
}
