//! Interactive prompts.
//!
//! Session components ask questions through [`Prompter`] so that the same
//! flow runs against a real terminal or a scripted answer list.

use crate::error::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::collections::VecDeque;

pub trait Prompter {
    /// Pick one of `items`; returns its index.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize>;

    /// Read one line of free text.
    fn input(&mut self, prompt: &str) -> Result<String>;
}

/// Terminal prompts backed by `dialoguer`.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(0)
            .items(items)
            .interact()?;
        Ok(selection)
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        let value: String =
            Input::with_theme(&self.theme).with_prompt(prompt).allow_empty(true).interact_text()?;
        Ok(value)
    }
}

/// One pre-recorded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Choose the item with this label.
    Pick(String),
    Text(String),
}

/// Replays answers in order and records every prompt it was asked.
///
/// Used by tests and by embedders that drive a session without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self { answers: answers.into_iter().collect(), asked: Vec::new() }
    }

    pub fn pick(label: &str) -> Answer {
        Answer::Pick(label.to_string())
    }

    pub fn text(value: &str) -> Answer {
        Answer::Text(value.to_string())
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> Result<Answer> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            dialoguer::Error::IO(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("no scripted answer for '{prompt}'"),
            ))
            .into()
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        match self.next_answer(prompt)? {
            Answer::Pick(label) => items.iter().position(|item| *item == label).ok_or_else(|| {
                dialoguer::Error::IO(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("'{label}' is not one of {items:?}"),
                ))
                .into()
            }),
            Answer::Text(text) => Err(dialoguer::Error::IO(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("expected a selection for '{prompt}', got text '{text}'"),
            ))
            .into()),
        }
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        match self.next_answer(prompt)? {
            Answer::Text(text) => Ok(text),
            Answer::Pick(label) => Err(dialoguer::Error::IO(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("expected text for '{prompt}', got selection '{label}'"),
            ))
            .into()),
        }
    }
}
