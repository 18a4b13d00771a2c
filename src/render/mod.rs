//! Response output: terminal display or plain-text file.

use crate::domain::{Operation, OutputMethod};
use crate::error::{AppError, Result};
use crate::prompt::Prompter;
use crate::ui;
use console::style;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod plain;
pub mod terminal;

pub use plain::markdown_to_plain;
pub use terminal::render_markdown;

/// Where a response ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivered {
    Displayed,
    Saved(PathBuf),
}

pub struct OutputRenderer<W: Write> {
    out: W,
}

impl<W: Write> OutputRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Git messages are always displayed; other operations ask for a destination.
    pub fn deliver(
        &mut self,
        prompter: &mut dyn Prompter,
        operation: Operation,
        response: &str,
    ) -> Result<Delivered> {
        if operation == Operation::GenerateGitMessage {
            self.display(response)?;
            return Ok(Delivered::Displayed);
        }

        let labels: Vec<&str> = OutputMethod::ALL.iter().map(|m| m.label()).collect();
        let method = OutputMethod::ALL[prompter.select("Choose output method:", &labels)?];
        ui::info(&format!("You chose: {}", method.label()));

        let delivered = match method {
            OutputMethod::Display => {
                self.display(response)?;
                Delivered::Displayed
            }
            OutputMethod::File => {
                let path = PathBuf::from(prompter.input("Enter output file path:")?);
                self.save(&path, response)?;
                Delivered::Saved(path)
            }
        };
        Ok(delivered)
    }

    fn display(&mut self, response: &str) -> Result<()> {
        let rendered = render_markdown(response);
        writeln!(self.out, "{}\n", style("Response:").green())
            .and_then(|_| writeln!(self.out, "{rendered}"))
            .map_err(|source| {
                ui::failure("Error writing output.");
                AppError::FileWrite { path: PathBuf::from("<stdout>"), source }
            })
    }

    fn save(&mut self, path: &Path, response: &str) -> Result<()> {
        match std::fs::write(path, markdown_to_plain(response)) {
            Ok(()) => {
                ui::success(&format!("Successfully wrote output to file: {}", path.display()));
                Ok(())
            }
            Err(source) => {
                ui::failure("Error writing file.");
                Err(AppError::FileWrite { path: path.to_path_buf(), source })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn git_message_is_displayed_without_asking() {
        let mut renderer = OutputRenderer::new(Vec::new());
        let mut p = ScriptedPrompter::default();

        let delivered = renderer
            .deliver(&mut p, Operation::GenerateGitMessage, "feat: add parser")
            .expect("deliver");
        assert_eq!(delivered, Delivered::Displayed);
        assert!(p.asked.is_empty());

        let out = String::from_utf8(renderer.into_inner()).expect("utf8");
        assert!(console::strip_ansi_codes(&out).contains("feat: add parser"));
    }

    #[test]
    fn display_choice_prints_rendered_response() {
        let mut renderer = OutputRenderer::new(Vec::new());
        let mut p = ScriptedPrompter::new([ScriptedPrompter::pick("Display")]);

        renderer.deliver(&mut p, Operation::Summarize, "**Short** summary").expect("deliver");
        let out = String::from_utf8(renderer.into_inner()).expect("utf8");
        let out = console::strip_ansi_codes(&out);
        assert!(out.contains("Response:"));
        assert!(out.contains("Short summary"));
    }

    #[test]
    fn file_choice_writes_plain_transform() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("answer.txt");
        let mut renderer = OutputRenderer::new(Vec::new());
        let mut p = ScriptedPrompter::new([
            ScriptedPrompter::pick("File"),
            ScriptedPrompter::text(path.to_str().expect("utf8")),
        ]);

        let delivered =
            renderer.deliver(&mut p, Operation::AskQuestion, "# Answer\nUse `x`").expect("deliver");
        assert_eq!(delivered, Delivered::Saved(path.clone()));
        assert_eq!(fs::read_to_string(&path).expect("read"), "\nANSWER\n\nUse [CODE]x[/CODE]");
        assert!(renderer.into_inner().is_empty());
    }

    #[test]
    fn unwritable_path_is_file_write_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("no-such-dir").join("out.txt");
        let mut renderer = OutputRenderer::new(Vec::new());
        let mut p = ScriptedPrompter::new([
            ScriptedPrompter::pick("File"),
            ScriptedPrompter::text(path.to_str().expect("utf8")),
        ]);

        let err = renderer.deliver(&mut p, Operation::Translate, "text").expect_err("no dir");
        assert!(matches!(err, AppError::FileWrite { .. }));
    }
}
