//! Markdown to plain annotated text, for responses saved to a file.
//!
//! Six rewrite stages run once each, in a fixed order. Every stage sees the
//! output of the previous one, so earlier rewrites are visible to later
//! patterns.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

type Rewrite = fn(&Captures) -> String;

struct Stage {
    pattern: &'static Lazy<Regex>,
    rewrite: Rewrite,
}

static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(#{1,6})\s(.+)").expect("valid header regex"));
static FENCED_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```([^`]+)```").expect("valid fenced code regex"));
static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid bold regex"));
static ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*]+)\*").expect("valid italic regex"));

static STAGES: [Stage; 6] = [
    Stage { pattern: &HEADER_RE, rewrite: header },
    Stage { pattern: &FENCED_CODE_RE, rewrite: fenced_code },
    Stage { pattern: &INLINE_CODE_RE, rewrite: inline_code },
    Stage { pattern: &LINK_RE, rewrite: link },
    Stage { pattern: &BOLD_RE, rewrite: bold },
    Stage { pattern: &ITALIC_RE, rewrite: italic },
];

pub fn markdown_to_plain(markdown: &str) -> String {
    STAGES.iter().fold(markdown.to_string(), |text, stage| {
        let rewritten = stage.pattern.replace_all(&text, |caps: &Captures| (stage.rewrite)(caps));
        rewritten.into_owned()
    })
}

/// Indented by heading level, upper-cased, on its own line.
fn header(caps: &Captures) -> String {
    let level = caps[1].len();
    format!("\n{}{}\n", " ".repeat(level - 1), caps[2].to_uppercase())
}

fn fenced_code(caps: &Captures) -> String {
    format!("\n[CODE]\n{}\n[/CODE]\n", &caps[1])
}

fn inline_code(caps: &Captures) -> String {
    format!("[CODE]{}[/CODE]", &caps[1])
}

fn link(caps: &Captures) -> String {
    format!("{} (URL: {})", &caps[1], &caps[2])
}

fn bold(caps: &Captures) -> String {
    caps[1].to_uppercase()
}

fn italic(caps: &Captures) -> String {
    format!("_{}_", &caps[1])
}
