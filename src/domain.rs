//! Core domain types shared by the session components.

/// The task the user picks at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AskQuestion,
    Summarize,
    Translate,
    GenerateCode,
    CommentCode,
    AskPdf,
    AskUrl,
    GenerateGitMessage,
}

impl Operation {
    /// Menu order.
    pub const ALL: [Operation; 8] = [
        Operation::AskQuestion,
        Operation::Summarize,
        Operation::Translate,
        Operation::GenerateCode,
        Operation::CommentCode,
        Operation::AskPdf,
        Operation::AskUrl,
        Operation::GenerateGitMessage,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::AskQuestion => "Ask a question",
            Operation::Summarize => "Summarize text",
            Operation::Translate => "Translate text",
            Operation::GenerateCode => "Generate code",
            Operation::CommentCode => "Add comments to code",
            Operation::AskPdf => "Ask PDF",
            Operation::AskUrl => "Ask URL",
            Operation::GenerateGitMessage => "Generate Git Message",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|op| op.label()).collect()
    }
}

/// How free-form input is gathered for the text-oriented operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    File,
    Text,
}

impl InputMethod {
    pub const ALL: [InputMethod; 2] = [InputMethod::File, InputMethod::Text];

    pub fn label(self) -> &'static str {
        match self {
            InputMethod::File => "File",
            InputMethod::Text => "Text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMethod {
    Display,
    File,
}

impl OutputMethod {
    pub const ALL: [OutputMethod; 2] = [OutputMethod::Display, OutputMethod::File];

    pub fn label(self) -> &'static str {
        match self {
            OutputMethod::Display => "Display",
            OutputMethod::File => "File",
        }
    }
}

pub const POPULAR_LANGUAGES: [&str; 10] =
    ["JavaScript", "Python", "Java", "C++", "C#", "TypeScript", "PHP", "Swift", "Go", "Kotlin"];

/// Input text gathered for one run plus the optional follow-up question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcquiredInput {
    pub text: String,
    pub question: Option<String>,
}

impl AcquiredInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), question: None }
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }
}
