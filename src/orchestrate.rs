//! Input acquisition for the selected operation.

use crate::domain::{AcquiredInput, InputMethod, Operation, POPULAR_LANGUAGES};
use crate::error::{AppError, Result};
use crate::fetch;
use crate::prompt::Prompter;
use crate::templates::PromptTemplates;
use crate::ui;
use std::path::{Path, PathBuf};

pub struct Orchestrator<'a> {
    templates: &'a PromptTemplates,
    http: &'a reqwest::blocking::Client,
    workdir: PathBuf,
    show_spinner: bool,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        templates: &'a PromptTemplates,
        http: &'a reqwest::blocking::Client,
        workdir: impl Into<PathBuf>,
    ) -> Self {
        Self { templates, http, workdir: workdir.into(), show_spinner: true }
    }

    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    /// Gather the input text (and follow-up question) for `operation`.
    pub fn acquire(
        &self,
        prompter: &mut dyn Prompter,
        operation: Operation,
    ) -> Result<AcquiredInput> {
        match operation {
            Operation::AskPdf => {
                let path = prompter.input("Enter file path:")?;
                let text = fetch::read_pdf(Path::new(&path))?;
                ui::success("\nSuccessfully read file.");
                let question = prompter.input("What do you want to know?")?;
                Ok(AcquiredInput::new(text).with_question(question))
            }
            Operation::AskUrl => {
                let url = prompter.input("Enter URL:")?;
                let text = self.page_payload(&url)?;
                let question = prompter.input("What do you want to know?")?;
                Ok(AcquiredInput::new(text).with_question(question))
            }
            Operation::GenerateGitMessage => {
                let diff = fetch::fetch_git_diff(&self.workdir)?;
                ui::success("\nSuccessfully read git diff.");
                tracing::debug!("git diff payload: {}", diff);
                Ok(AcquiredInput::new(diff))
            }
            _ => self.acquire_text(prompter, operation),
        }
    }

    fn acquire_text(
        &self,
        prompter: &mut dyn Prompter,
        operation: Operation,
    ) -> Result<AcquiredInput> {
        let labels: Vec<&str> = InputMethod::ALL.iter().map(|m| m.label()).collect();
        let method = InputMethod::ALL[prompter.select("Choose input method:", &labels)?];

        let mut input = match method {
            InputMethod::File => {
                let path = prompter.input("Enter file path:")?;
                let text = fetch::read_text_file(Path::new(&path))?;
                ui::success("\nSuccessfully read file.");
                let mut input = AcquiredInput::new(text);
                if operation == Operation::AskQuestion {
                    let question = prompter.input("What do you want to ask from this file?")?;
                    ui::info(&format!("Your question: {question}"));
                    input.question = Some(question);
                }
                input
            }
            InputMethod::Text => {
                let text = prompter.input("Enter text:")?;
                ui::success("Successfully read text.");
                AcquiredInput::new(text)
            }
        };

        match operation {
            Operation::Translate => {
                let language = prompter.input("Enter language:")?;
                input.text = self.templates.render_translate(&input.text, &language);
            }
            Operation::GenerateCode => {
                let idx = prompter.select("Select language:", &POPULAR_LANGUAGES)?;
                input.text = self.templates.render_generate_code(&input.text, POPULAR_LANGUAGES[idx]);
            }
            _ => {}
        }

        Ok(input)
    }

    /// Fetch a page as JSON text. A failed fetch is reported and yields empty content.
    fn page_payload(&self, url: &str) -> Result<String> {
        let spinner = self.show_spinner.then(|| ui::spinner("Getting URL Data..."));
        let fetched = fetch::fetch_page(self.http, url);
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        match fetched {
            Ok(page) => {
                ui::success("\nSuccessfully read URL.");
                Ok(serde_json::to_string(&page)?)
            }
            Err(err @ AppError::Fetch { .. }) => {
                tracing::warn!("{err}");
                ui::warn(&format!("{err}; continuing without page content."));
                Ok(String::new())
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use crate::templates::TemplateOverrides;
    use crate::utils::test_server::serve;
    use std::fs;
    use tempfile::TempDir;

    fn templates() -> PromptTemplates {
        PromptTemplates::with_overrides(&TemplateOverrides {
            translate: Some("To REQ_LANG: REQ_TEXT".into()),
            generate_code: Some("In REQ_LANG, REQ_TEXT".into()),
            ..Default::default()
        })
    }

    #[test]
    fn text_input_is_read_from_one_line() {
        let t = templates();
        let http = reqwest::blocking::Client::new();
        let orch = Orchestrator::new(&t, &http, ".").with_spinner(false);
        let mut p = ScriptedPrompter::new([
            ScriptedPrompter::pick("Text"),
            ScriptedPrompter::text("The quick brown fox"),
        ]);

        let input = orch.acquire(&mut p, Operation::Summarize).expect("acquire");
        assert_eq!(input, AcquiredInput::new("The quick brown fox"));
    }

    #[test]
    fn ask_question_from_file_collects_follow_up() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("doc.txt");
        fs::write(&path, "contents").expect("write");
        let t = templates();
        let http = reqwest::blocking::Client::new();
        let orch = Orchestrator::new(&t, &http, tmp.path()).with_spinner(false);
        let mut p = ScriptedPrompter::new([
            ScriptedPrompter::pick("File"),
            ScriptedPrompter::text(path.to_str().expect("utf8")),
            ScriptedPrompter::text("What is it?"),
        ]);

        let input = orch.acquire(&mut p, Operation::AskQuestion).expect("acquire");
        assert_eq!(input, AcquiredInput::new("contents").with_question("What is it?"));
    }

    #[test]
    fn translate_is_pre_rendered() {
        let t = templates();
        let http = reqwest::blocking::Client::new();
        let orch = Orchestrator::new(&t, &http, ".").with_spinner(false);
        let mut p = ScriptedPrompter::new([
            ScriptedPrompter::pick("Text"),
            ScriptedPrompter::text("hola"),
            ScriptedPrompter::text("English"),
        ]);

        let input = orch.acquire(&mut p, Operation::Translate).expect("acquire");
        assert_eq!(input.text, "To English: hola");
        assert!(input.question.is_none());
    }

    #[test]
    fn generate_code_offers_popular_languages() {
        let t = templates();
        let http = reqwest::blocking::Client::new();
        let orch = Orchestrator::new(&t, &http, ".").with_spinner(false);
        let mut p = ScriptedPrompter::new([
            ScriptedPrompter::pick("Text"),
            ScriptedPrompter::text("reverse a string"),
            ScriptedPrompter::pick("Kotlin"),
        ]);

        let input = orch.acquire(&mut p, Operation::GenerateCode).expect("acquire");
        assert_eq!(input.text, "In Kotlin, reverse a string");
    }

    #[test]
    fn missing_file_aborts_acquisition() {
        let tmp = TempDir::new().expect("tmp");
        let t = templates();
        let http = reqwest::blocking::Client::new();
        let orch = Orchestrator::new(&t, &http, tmp.path()).with_spinner(false);
        let missing = tmp.path().join("missing.txt");
        let mut p = ScriptedPrompter::new([
            ScriptedPrompter::pick("File"),
            ScriptedPrompter::text(missing.to_str().expect("utf8")),
        ]);

        let err = orch.acquire(&mut p, Operation::CommentCode).expect_err("missing");
        assert!(matches!(err, AppError::FileRead { .. }));
    }

    #[test]
    fn ask_url_submits_page_json() {
        let (base, _requests) = serve(vec![(
            200,
            "text/html",
            r#"<meta name="description" content="Guide"><h2>Setup</h2><p>Run it.</p>"#,
        )]);
        let t = templates();
        let http = reqwest::blocking::Client::new();
        let orch = Orchestrator::new(&t, &http, ".").with_spinner(false);
        let mut p = ScriptedPrompter::new([
            ScriptedPrompter::text(&format!("{base}/guide")),
            ScriptedPrompter::text("How do I start?"),
        ]);

        let input = orch.acquire(&mut p, Operation::AskUrl).expect("acquire");
        assert_eq!(
            input.text,
            r#"{"metaData":{"description":"Guide"},"pageContent":["Setup","Run it."]}"#
        );
        assert_eq!(input.question.as_deref(), Some("How do I start?"));
        assert_eq!(p.asked, vec!["Enter URL:", "What do you want to know?"]);
    }

    #[test]
    fn unreachable_url_degrades_to_empty_content() {
        let t = templates();
        let http = reqwest::blocking::Client::new();
        let orch = Orchestrator::new(&t, &http, ".").with_spinner(false);
        let mut p = ScriptedPrompter::new([
            ScriptedPrompter::text("http://127.0.0.1:9/"),
            ScriptedPrompter::text("What is this page about?"),
        ]);

        let input = orch.acquire(&mut p, Operation::AskUrl).expect("acquire");
        assert_eq!(input.text, "");
        assert_eq!(input.question.as_deref(), Some("What is this page about?"));
    }
}
