// src/repository/prompt.rs

//! Confirmation before irreversible actions

use dialoguer::Confirm;
use dialoguer::console::Term;
use std::fmt::Display;
use tracing::warn;

/// Asks the user a yes/no question
pub trait Prompt {
    /// Returns true if the user agreed
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> Prompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}

/// Prompt on the controlling terminal
///
/// Interactive mode reads a single keypress from the terminal; without a
/// terminal the question is declined.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt {
    auto_confirm: bool,
}

impl TerminalPrompt {
    pub fn new(auto_confirm: bool) -> Self {
        Self { auto_confirm }
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        if self.auto_confirm {
            // Keep the question in the output for the record
            println!("{}", auto_confirm_line(question));
            return true;
        }

        let answer = Confirm::new()
            .with_prompt(question)
            .default(false)
            .wait_for_newline(false)
            .interact_on_opt(&Term::stderr());
        accepted(answer)
    }
}

/// The line echoed in auto-confirm mode, rendered like the interactive prompt
fn auto_confirm_line(question: &str) -> String {
    format!("{} [y/N] .", question)
}

/// Only an explicit yes confirms; cancel, no terminal and read errors decline
fn accepted<E: Display>(answer: Result<Option<bool>, E>) -> bool {
    match answer {
        Ok(Some(confirmed)) => confirmed,
        Ok(None) => false,
        Err(e) => {
            warn!("Failed to read answer: {}", e);
            false
        }
    }
}
