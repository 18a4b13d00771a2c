//! Operation dispatch: build the submitted text and call the model once.

use crate::domain::{AcquiredInput, Operation};
use crate::error::Result;
use crate::model::ModelClient;
use crate::templates::PromptTemplates;
use crate::ui;

/// Input text with the follow-up question appended after a `Q:` marker.
pub fn effective_input(input: &AcquiredInput) -> String {
    match input.question.as_deref() {
        Some(question) if !question.is_empty() => format!("{}\n\nQ: {}", input.text, question),
        _ => input.text.clone(),
    }
}

/// Exact text submitted to the model for `operation`.
///
/// Translate and GenerateCode arrive pre-rendered and pass through unchanged.
pub fn build_submission(
    operation: Operation,
    input: &AcquiredInput,
    templates: &PromptTemplates,
) -> String {
    let text = effective_input(input);
    match operation {
        Operation::AskQuestion
        | Operation::Translate
        | Operation::GenerateCode
        | Operation::AskPdf
        | Operation::AskUrl => text,
        Operation::Summarize => templates.render_summarize(&text),
        Operation::CommentCode => templates.render_comment_code(&text),
        Operation::GenerateGitMessage => templates.render_git_message(&text),
    }
}

pub struct Dispatcher<'a, C: ModelClient> {
    client: &'a C,
    templates: &'a PromptTemplates,
    show_spinner: bool,
}

impl<'a, C: ModelClient> Dispatcher<'a, C> {
    pub fn new(client: &'a C, templates: &'a PromptTemplates) -> Self {
        Self { client, templates, show_spinner: true }
    }

    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    /// Submit the rendered prompt and return the completion.
    pub fn dispatch(&self, operation: Operation, input: &AcquiredInput) -> Result<String> {
        let prompt = build_submission(operation, input, self.templates);
        tracing::debug!("Submitting {} chars for '{}'", prompt.chars().count(), operation.label());

        let spinner = self.show_spinner.then(|| ui::spinner("Loading response..."));
        match self.client.send_prompt(&prompt) {
            Ok(response) => {
                if let Some(pb) = spinner {
                    pb.finish_and_clear();
                }
                Ok(response)
            }
            Err(err) => {
                if let Some(pb) = spinner {
                    pb.abandon();
                }
                ui::failure("Error loading response.");
                Err(err)
            }
        }
    }
}
