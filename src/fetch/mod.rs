//! Content acquisition (local file, PDF, web page, git diff)

pub mod diff;
pub mod file;
pub mod git;
pub mod pdf;
pub mod url;

pub use file::read_text_file;
pub use git::fetch_git_diff;
pub use pdf::read_pdf;
pub use url::{extract_page, fetch_page, PageContent};
