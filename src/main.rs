//! askterm: ask a language model about text, files, PDFs, web pages or a git diff
//!
//! Interactive entry point; see [`askterm::cli`] for flags and configuration.

use anyhow::Result;

fn main() -> Result<()> {
    askterm::cli::run()
}
