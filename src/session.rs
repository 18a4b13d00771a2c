//! One interactive run: operation → input → model → output.

use crate::dispatch::Dispatcher;
use crate::domain::Operation;
use crate::error::Result;
use crate::model::ModelClient;
use crate::orchestrate::Orchestrator;
use crate::prompt::Prompter;
use crate::render::{Delivered, OutputRenderer};
use crate::templates::PromptTemplates;
use crate::ui;
use std::io::Write;
use std::path::PathBuf;

pub struct Session<C: ModelClient> {
    templates: PromptTemplates,
    client: C,
    http: reqwest::blocking::Client,
    workdir: PathBuf,
    show_spinners: bool,
}

impl<C: ModelClient> Session<C> {
    pub fn new(
        templates: PromptTemplates,
        client: C,
        http: reqwest::blocking::Client,
        workdir: impl Into<PathBuf>,
    ) -> Self {
        Self { templates, client, http, workdir: workdir.into(), show_spinners: true }
    }

    pub fn with_spinners(mut self, show: bool) -> Self {
        self.show_spinners = show;
        self
    }

    /// Run once, reporting any failure instead of returning it.
    ///
    /// Returns `None` when the run was aborted by an error.
    pub fn run<W: Write>(
        &self,
        prompter: &mut dyn Prompter,
        renderer: &mut OutputRenderer<W>,
    ) -> Option<Delivered> {
        match self.execute(prompter, renderer) {
            Ok(delivered) => Some(delivered),
            Err(err) => {
                tracing::error!("run aborted: {err}");
                if !err.already_reported() {
                    ui::failure(&format!("An error occurred: {err}"));
                }
                None
            }
        }
    }

    /// Run once, propagating the first failure.
    pub fn execute<W: Write>(
        &self,
        prompter: &mut dyn Prompter,
        renderer: &mut OutputRenderer<W>,
    ) -> Result<Delivered> {
        let idx = prompter.select("Select an operation:", &Operation::labels())?;
        let operation = Operation::ALL[idx];
        ui::info(&format!("You chose: {}", operation.label()));

        let input = Orchestrator::new(&self.templates, &self.http, self.workdir.clone())
            .with_spinner(self.show_spinners)
            .acquire(prompter, operation)?;

        let response = Dispatcher::new(&self.client, &self.templates)
            .with_spinner(self.show_spinners)
            .dispatch(operation, &input)?;

        renderer.deliver(prompter, operation, &response)
    }
}
