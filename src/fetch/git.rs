//! Working-tree git diff capture.

use crate::error::Result;
use crate::fetch::diff::FileDiff;
use crate::utils::truncate_chars;
use git2::{Patch, Repository};
use std::path::Path;

/// Upper bound, in characters, on the serialized diff handed to the model.
pub const MAX_DIFF_CHARS: usize = 4096;

/// Changes of the working tree against the index, the same set `git diff` shows.
pub fn working_tree_diff(workdir: &Path) -> Result<Vec<FileDiff>> {
    let repo = Repository::discover(workdir)?;
    let diff = repo.diff_index_to_workdir(None, None)?;

    let mut files = Vec::new();
    for idx in 0..diff.deltas().len() {
        if let Some(patch) = Patch::from_diff(&diff, idx)? {
            files.push(FileDiff::from_patch(&patch)?);
        }
    }
    Ok(files)
}

/// Serialize the working-tree diff as JSON, capped at [`MAX_DIFF_CHARS`] characters.
pub fn fetch_git_diff(workdir: &Path) -> Result<String> {
    let files = working_tree_diff(workdir)?;
    tracing::debug!("Collected git diff: {} file(s) changed", files.len());
    Ok(diff_payload(&serde_json::to_string(&files)?))
}

fn diff_payload(json: &str) -> String {
    truncate_chars(json, MAX_DIFF_CHARS).to_string()
}
