//! Prompt templates and placeholder substitution.
//!
//! Templates ship as plain text in an embedded TOML resource and are loaded
//! once per process into an immutable [`PromptTemplates`] value. A config file
//! may replace any of them through [`TemplateOverrides`].

use once_cell::sync::Lazy;
use serde::Deserialize;

pub const TEXT_PLACEHOLDER: &str = "REQ_TEXT";
pub const LANG_PLACEHOLDER: &str = "REQ_LANG";

const DEFAULT_TEMPLATES: &str = include_str!("defaults.toml");

static DEFAULTS: Lazy<PromptTemplates> = Lazy::new(|| {
    toml::from_str(DEFAULT_TEMPLATES).expect("embedded prompt templates are valid TOML")
});

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptTemplates {
    pub summarize: String,
    pub comment_code: String,
    pub translate: String,
    pub generate_code: String,
    pub git_message: String,
}

/// Per-template replacements read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateOverrides {
    pub summarize: Option<String>,
    pub comment_code: Option<String>,
    pub translate: Option<String>,
    pub generate_code: Option<String>,
    pub git_message: Option<String>,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        DEFAULTS.clone()
    }
}

impl PromptTemplates {
    pub fn with_overrides(overrides: &TemplateOverrides) -> Self {
        let mut templates = Self::default();
        let pairs = [
            (&mut templates.summarize, &overrides.summarize),
            (&mut templates.comment_code, &overrides.comment_code),
            (&mut templates.translate, &overrides.translate),
            (&mut templates.generate_code, &overrides.generate_code),
            (&mut templates.git_message, &overrides.git_message),
        ];
        for (slot, value) in pairs {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
        templates
    }

    pub fn render_translate(&self, text: &str, language: &str) -> String {
        fill(&self.translate, text, Some(language))
    }

    pub fn render_generate_code(&self, text: &str, language: &str) -> String {
        fill(&self.generate_code, text, Some(language))
    }

    pub fn render_comment_code(&self, text: &str) -> String {
        fill(&self.comment_code, text, None)
    }

    pub fn render_git_message(&self, text: &str) -> String {
        fill(&self.git_message, text, None)
    }

    /// The summarize template takes no placeholder; input is appended on its own line.
    pub fn render_summarize(&self, text: &str) -> String {
        format!("{}\n{}", self.summarize, text)
    }
}

/// Literal substitution of the first `REQ_TEXT`, then the first `REQ_LANG`.
///
/// The language pass runs on the already-substituted string, so a `REQ_LANG`
/// token carried in by `text` is replaced if the template has none left.
pub fn fill(template: &str, text: &str, language: Option<&str>) -> String {
    let rendered = template.replacen(TEXT_PLACEHOLDER, text, 1);
    match language {
        Some(lang) => rendered.replacen(LANG_PLACEHOLDER, lang, 1),
        None => rendered,
    }
}
