//! Markdown rendering for terminal display.

use console::Style;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Render markdown as styled terminal text.
///
/// Styling is applied through `console`, which drops escape codes when the
/// output is not a color-capable terminal.
pub fn render_markdown(markdown: &str) -> String {
    let mut renderer = TermRenderer::default();
    for event in Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH) {
        renderer.process(event);
    }
    renderer.finish()
}

#[derive(Default)]
struct TermRenderer {
    out: String,
    heading: Option<HeadingLevel>,
    strong: usize,
    emphasis: usize,
    strikethrough: usize,
    in_code_block: bool,
    links: Vec<String>,
    // None = bullet list, Some(n) = next ordered item number
    lists: Vec<Option<u64>>,
}

impl TermRenderer {
    fn process(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                let styled = self.style().apply_to(text.as_ref()).to_string();
                self.out.push_str(&styled);
            }
            Event::Code(code) => {
                let styled = Style::new().yellow().apply_to(code.as_ref()).to_string();
                self.out.push_str(&styled);
            }
            Event::SoftBreak | Event::HardBreak => self.out.push('\n'),
            Event::Rule => self.out.push_str(&format!("{}\n\n", "─".repeat(40))),
            Event::Html(html) | Event::InlineHtml(html) => self.out.push_str(&html),
            Event::TaskListMarker(done) => self.out.push_str(if done { "[x] " } else { "[ ] " }),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.heading = Some(level);
                let marks = "#".repeat(heading_depth(level));
                let styled = Style::new().cyan().bold().apply_to(format!("{marks} ")).to_string();
                self.out.push_str(&styled);
            }
            Tag::Strong => self.strong += 1,
            Tag::Emphasis => self.emphasis += 1,
            Tag::Strikethrough => self.strikethrough += 1,
            Tag::CodeBlock(kind) => {
                self.in_code_block = true;
                if let CodeBlockKind::Fenced(lang) = kind {
                    if !lang.is_empty() {
                        let label = Style::new().dim().apply_to(format!("[{lang}]")).to_string();
                        self.out.push_str(&label);
                        self.out.push('\n');
                    }
                }
            }
            Tag::Link { dest_url, .. } => self.links.push(dest_url.to_string()),
            Tag::List(start) => {
                if !self.lists.is_empty() && !self.out.ends_with('\n') {
                    self.out.push('\n');
                }
                self.lists.push(start);
            }
            Tag::Item => {
                let depth = self.lists.len().saturating_sub(1);
                self.out.push_str(&"  ".repeat(depth));
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.out.push_str(&marker);
            }
            Tag::BlockQuote(_) => self.out.push_str("│ "),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.heading = None;
                self.out.push_str("\n\n");
            }
            TagEnd::Paragraph => {
                self.out.push('\n');
                if self.lists.is_empty() {
                    self.out.push('\n');
                }
            }
            TagEnd::Strong => self.strong = self.strong.saturating_sub(1),
            TagEnd::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            TagEnd::Strikethrough => self.strikethrough = self.strikethrough.saturating_sub(1),
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.out.push('\n');
            }
            TagEnd::Link => {
                if let Some(url) = self.links.pop() {
                    let styled = Style::new().dim().apply_to(format!(" ({url})")).to_string();
                    self.out.push_str(&styled);
                }
            }
            TagEnd::Item => {
                if !self.out.ends_with('\n') {
                    self.out.push('\n');
                }
            }
            TagEnd::List(_) => {
                self.lists.pop();
                if self.lists.is_empty() {
                    self.out.push('\n');
                }
            }
            _ => {}
        }
    }

    fn style(&self) -> Style {
        let mut style = Style::new();
        if self.heading.is_some() {
            style = style.cyan().bold();
        }
        if self.in_code_block {
            style = style.yellow();
        }
        if self.strong > 0 {
            style = style.bold();
        }
        if self.emphasis > 0 {
            style = style.italic();
        }
        if self.strikethrough > 0 {
            style = style.strikethrough();
        }
        if !self.links.is_empty() {
            style = style.underlined();
        }
        style
    }

    fn finish(self) -> String {
        self.out.trim_end().to_string()
    }
}

fn heading_depth(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
