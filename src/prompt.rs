//! Interactive terminal prompts.
//!
//! The workflows talk to a [`Prompter`] so they can run against scripted
//! answers in tests; [`TerminalPrompter`] is the dialoguer-backed one used by
//! the binary.

use crate::error::{Result, ShareError};
use dialoguer::{Confirm, Select};

pub trait Prompter {
    /// Ask a yes/no question.
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Single-select list; returns the index of the chosen item.
    fn select(&self, message: &str, items: &[String]) -> Result<usize>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(message)
            .default(true)
            .interact()?)
    }

    fn select(&self, message: &str, items: &[String]) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()?)
    }
}

/// A labelled option in a selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

/// Present `choices` in order and return the value the user picked.
pub fn select_choice<'c, T>(
    prompter: &dyn Prompter,
    message: &str,
    choices: &'c [Choice<T>],
) -> Result<&'c T> {
    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let index = prompter.select(message, &labels)?;

    choices
        .get(index)
        .map(|c| &c.value)
        .ok_or_else(|| ShareError::PromptError(format!("selection {} is out of range", index)))
}
